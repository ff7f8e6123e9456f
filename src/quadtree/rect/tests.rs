use super::*;
use crate::line::{Line, Vec2};
use crate::transform::IdentityTransform;

fn root() -> Rect {
    Rect { mid_x: 512, mid_y: 512, size_x: 512, size_y: 512 }
}

fn line(p1: (f64, f64), p2: (f64, f64), velocity: (f64, f64)) -> Line {
    Line {
        p1: Vec2::new(p1.0, p1.1),
        p2: Vec2::new(p2.0, p2.1),
        velocity: Vec2::new(velocity.0, velocity.1),
        id: 0,
        color: 0,
    }
}

#[test]
fn child_layout_matches_tl_bl_br_tr_convention() {
    let r = root();
    let tl = r.child(Quadrant::TopLeft);
    let bl = r.child(Quadrant::BottomLeft);
    let br = r.child(Quadrant::BottomRight);
    let tr = r.child(Quadrant::TopRight);

    assert!(tl.mid_x < r.mid_x && tl.mid_y < r.mid_y);
    assert!(bl.mid_x < r.mid_x && bl.mid_y > r.mid_y);
    assert!(br.mid_x > r.mid_x && br.mid_y > r.mid_y);
    assert!(tr.mid_x > r.mid_x && tr.mid_y < r.mid_y);
    for child in [tl, bl, br, tr] {
        assert_eq!(child.size_x, r.size_x / 2);
        assert_eq!(child.size_y, r.size_y / 2);
    }
}

#[test]
fn stationary_line_entirely_in_one_quadrant() {
    let r = root();
    // Fully inside the bottom-right quadrant, well clear of both midlines.
    let l = line((600.0, 600.0), (700.0, 700.0), (0.0, 0.0));
    let flags = place_line_in_branches(&l, &r, 1.0, &IdentityTransform);
    assert!(flags.br);
    assert!(!flags.tl);
    assert!(!flags.tr);
    assert!(!flags.bl);
}

#[test]
fn vertical_line_on_the_split_straddles_both_sides() {
    let r = root();
    let l = line((512.0, 100.0), (512.0, 900.0), (0.0, 0.0));
    let flags = place_line_in_branches(&l, &r, 1.0, &IdentityTransform);
    // An endpoint exactly on mid_x is inclusive on both sides per the
    // placement predicate's `<=`/`>=` comparisons.
    assert!(flags.tl || flags.bl);
    assert!(flags.tr || flags.br);
}

#[test]
fn horizontal_line_on_the_split_straddles_both_sides() {
    let r = root();
    let l = line((100.0, 512.0), (900.0, 512.0), (0.0, 0.0));
    let flags = place_line_in_branches(&l, &r, 1.0, &IdentityTransform);
    assert!(flags.tl || flags.tr);
    assert!(flags.bl || flags.br);
}

#[test]
fn moving_line_sweeps_into_additional_quadrant() {
    let r = root();
    // Starts entirely in TL, moves far enough right+down over dt that the
    // swept parallelogram crosses into BR territory too.
    let l = line((200.0, 200.0), (300.0, 250.0), (400.0, 400.0));
    let stationary = place_line_in_branches(&l, &r, 0.0, &IdentityTransform);
    let swept = place_line_in_branches(&l, &r, 1.0, &IdentityTransform);
    assert!(stationary.tl);
    assert!(!stationary.br);
    assert!(swept.br);
}

#[test]
fn zero_length_zero_velocity_line_places_as_a_single_point() {
    let r = root();
    let l = line((600.0, 600.0), (600.0, 600.0), (0.0, 0.0));
    let flags = place_line_in_branches(&l, &r, 1.0, &IdentityTransform);
    assert!(flags.br);
    assert!(!flags.tl);
}

#[test]
fn positive_and_negative_slope_oblique_lines_place_plausibly() {
    let r = root();
    // Rising line crossing from bottom-left toward top-right through the center.
    let rising = line((200.0, 800.0), (800.0, 200.0), (0.0, 0.0));
    let flags = place_line_in_branches(&rising, &r, 0.0, &IdentityTransform);
    assert!(flags.bl || flags.tr);

    // Falling (negative-slope-case branch) line crossing the same way but
    // the other diagonal.
    let falling = line((200.0, 200.0), (800.0, 800.0), (0.0, 0.0));
    let flags = place_line_in_branches(&falling, &r, 0.0, &IdentityTransform);
    assert!(flags.tl || flags.br);
}
