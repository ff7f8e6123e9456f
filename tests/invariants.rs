//! Black-box property checks against the public API: broad-phase soundness,
//! query self-exclusion/dedup, and clear+replay idempotence. Structural
//! invariants that need the tree's internals (leaf counts, depth caps,
//! reachability) are covered by the `#[cfg(test)]` unit tests next to
//! `Quadtree` itself, which can see those fields.

use proptest::prelude::*;
use sweep_quadtree::line::{Line, Vec2};
use sweep_quadtree::quadtree::Quadtree;
use sweep_quadtree::transform::IdentityTransform;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 1024;
const DT: f64 = 1.0;

fn coord() -> impl Strategy<Value = f64> {
    0.0f64..1024.0
}

fn velocity() -> impl Strategy<Value = f64> {
    -64.0f64..64.0
}

fn line_strategy(id: u32) -> impl Strategy<Value = Line> {
    (coord(), coord(), coord(), coord(), velocity(), velocity()).prop_map(
        move |(x1, y1, x2, y2, vx, vy)| Line {
            p1: Vec2::new(x1, y1),
            p2: Vec2::new(x2, y2),
            velocity: Vec2::new(vx, vy),
            id,
            color: 0,
        },
    )
}

fn swept_quad(line: &Line, dt: f64) -> [Vec2; 4] {
    let future = Vec2::new(line.p1.x + line.velocity.x * dt, line.p1.y + line.velocity.y * dt);
    let future2 = Vec2::new(line.p2.x + line.velocity.x * dt, line.p2.y + line.velocity.y * dt);
    [line.p1, line.p2, future2, future]
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0)) && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

fn swept_parallelograms_intersect(a: &Line, b: &Line, dt: f64) -> bool {
    let qa = swept_quad(a, dt);
    let qb = swept_quad(b, dt);
    for i in 0..4 {
        for j in 0..4 {
            if segments_intersect(qa[i], qa[(i + 1) % 4], qb[j], qb[(j + 1) % 4]) {
                return true;
            }
        }
    }
    false
}

proptest! {
    #[test]
    fn query_is_a_superset_of_true_geometric_intersections(
        lines in prop::collection::vec((coord(), coord(), coord(), coord(), velocity(), velocity()), 2..12)
    ) {
        init_tracing();
        let lines: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, (x1, y1, x2, y2, vx, vy))| Line {
                p1: Vec2::new(x1, y1),
                p2: Vec2::new(x2, y2),
                velocity: Vec2::new(vx, vy),
                id: i as u32,
                color: 0,
            })
            .collect();

        let mut tree = Quadtree::new(&lines, WIDTH, HEIGHT, 6, 4, IdentityTransform).unwrap();
        for i in 0..lines.len() {
            tree.insert(i as u32, DT).unwrap();
        }

        for i in 0..lines.len() {
            let candidates = tree.query(i as u32, DT);
            for j in 0..lines.len() {
                if i == j {
                    continue;
                }
                if swept_parallelograms_intersect(&lines[i], &lines[j], DT) {
                    prop_assert!(
                        candidates.contains(&(j as u32)),
                        "line {} truly intersects line {} but query missed it",
                        i,
                        j
                    );
                }
            }
        }
    }

    #[test]
    fn query_never_contains_self_or_duplicates(
        lines in prop::collection::vec(line_strategy(0), 1..10)
    ) {
        init_tracing();
        let lines: Vec<Line> = lines.into_iter().enumerate().map(|(i, mut l)| { l.id = i as u32; l }).collect();
        let mut tree = Quadtree::new(&lines, WIDTH, HEIGHT, 6, 4, IdentityTransform).unwrap();
        for i in 0..lines.len() {
            tree.insert(i as u32, DT).unwrap();
        }
        for i in 0..lines.len() {
            let candidates = tree.query(i as u32, DT);
            prop_assert!(!candidates.contains(&(i as u32)));
            let mut seen = candidates.clone();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), candidates.len());
        }
    }

    #[test]
    fn clear_then_replay_matches_a_fresh_tree(
        lines in prop::collection::vec(line_strategy(0), 1..10)
    ) {
        init_tracing();
        let lines: Vec<Line> = lines.into_iter().enumerate().map(|(i, mut l)| { l.id = i as u32; l }).collect();

        let mut fresh = Quadtree::new(&lines, WIDTH, HEIGHT, 6, 4, IdentityTransform).unwrap();
        for i in 0..lines.len() {
            fresh.insert(i as u32, DT).unwrap();
        }

        let mut replayed = Quadtree::new(&lines, WIDTH, HEIGHT, 6, 4, IdentityTransform).unwrap();
        for i in 0..lines.len() {
            replayed.insert(i as u32, DT).unwrap();
        }
        replayed.clear();
        for i in 0..lines.len() {
            replayed.insert(i as u32, DT).unwrap();
        }

        for i in 0..lines.len() {
            let mut a = fresh.query(i as u32, DT);
            let mut b = replayed.query(i as u32, DT);
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
