//! Axis-aligned rectangles and the moving-segment placement predicate
//! (`PlaceLineInBranches` in the original source).

use crate::line::{Line, Vec2};
use crate::transform::CoordinateTransform;

/// An axis-aligned rectangle, stored as a center point and half-extents, all
/// integer-valued.
///
/// Child half-extents are `size_* >> 1`; the root's width/height must be
/// chosen so that `max_depth` consecutive halvings never reach zero before
/// the depth cap does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Center x-coordinate.
    pub mid_x: i32,
    /// Center y-coordinate.
    pub mid_y: i32,
    /// Half-width: the rectangle spans `[mid_x - size_x, mid_x + size_x]`.
    pub size_x: i32,
    /// Half-height: the rectangle spans `[mid_y - size_y, mid_y + size_y]`.
    pub size_y: i32,
}

/// Child index within a branch's four contiguous children, in the fixed
/// order `{TL, BL, BR, TR}`.
///
/// `+y` grows downward (window/screen convention): `TL` has
/// `mid_x < parent.mid_x` and `mid_y < parent.mid_y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// Minus-x, minus-y.
    TopLeft = 0,
    /// Minus-x, plus-y.
    BottomLeft = 1,
    /// Plus-x, plus-y.
    BottomRight = 2,
    /// Plus-x, minus-y.
    TopRight = 3,
}
pub(crate) const QUADRANTS: [Quadrant; 4] =
    [Quadrant::TopLeft, Quadrant::BottomLeft, Quadrant::BottomRight, Quadrant::TopRight];

impl Rect {
    /// The rectangle of the `quadrant`-th child, per the `{TL, BL, BR, TR}`
    /// layout. Does not check whether `self` can still be subdivided
    /// (`size_* >> 1` reaching zero) — that is the caller's responsibility,
    /// enforced by the depth cap rather than here.
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let half_x = self.size_x >> 1;
        let half_y = self.size_y >> 1;
        let (dx, dy) = match quadrant {
            Quadrant::TopLeft => (-1, -1),
            Quadrant::BottomLeft => (-1, 1),
            Quadrant::BottomRight => (1, 1),
            Quadrant::TopRight => (1, -1),
        };
        Self {
            mid_x: self.mid_x + dx * half_x,
            mid_y: self.mid_y + dy * half_y,
            size_x: half_x,
            size_y: half_y,
        }
    }

    /// The four corners of the perimeter, as `(left, bottom, right, top)`
    /// segments — used only by [`get_rect_line_segments`][seg] to draw an
    /// overlay.
    ///
    /// [seg]: crate::quadtree::Quadtree::get_rect_line_segments
    pub(crate) fn perimeter_segments(&self) -> [(Vec2, Vec2); 4] {
        let l = (self.mid_x - self.size_x) as f64;
        let r = (self.mid_x + self.size_x) as f64;
        let t = (self.mid_y - self.size_y) as f64;
        let b = (self.mid_y + self.size_y) as f64;
        [
            (Vec2::new(l, t), Vec2::new(l, b)),
            (Vec2::new(l, b), Vec2::new(r, b)),
            (Vec2::new(r, t), Vec2::new(r, b)),
            (Vec2::new(l, t), Vec2::new(r, t)),
        ]
    }

    /// The vertical and horizontal midlines, used by
    /// [`get_rect_line_segments`][seg] to draw the branch cross-hair.
    ///
    /// [seg]: crate::quadtree::Quadtree::get_rect_line_segments
    pub(crate) fn crosshair_segments(&self) -> [(Vec2, Vec2); 2] {
        let mx = self.mid_x as f64;
        let my = self.mid_y as f64;
        let t = (self.mid_y - self.size_y) as f64;
        let b = (self.mid_y + self.size_y) as f64;
        let l = (self.mid_x - self.size_x) as f64;
        let r = (self.mid_x + self.size_x) as f64;
        [(Vec2::new(mx, t), Vec2::new(mx, b)), (Vec2::new(l, my), Vec2::new(r, my))]
    }
}

/// Which of the four children a boundary segment touches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BranchFlags {
    pub tl: bool,
    pub bl: bool,
    pub br: bool,
    pub tr: bool,
}
impl BranchFlags {
    fn union(self, other: Self) -> Self {
        Self {
            tl: self.tl || other.tl,
            bl: self.bl || other.bl,
            br: self.br || other.br,
            tr: self.tr || other.tr,
        }
    }

    pub(crate) fn get(&self, quadrant: Quadrant) -> bool {
        match quadrant {
            Quadrant::TopLeft => self.tl,
            Quadrant::BottomLeft => self.bl,
            Quadrant::BottomRight => self.br,
            Quadrant::TopRight => self.tr,
        }
    }
}

/// Computes which of `rect`'s four children the swept parallelogram of
/// `line` over `dt` touches.
///
/// The parallelogram is decomposed into its four boundary segments — the
/// current position, the position after `dt`, and the two endpoint
/// trajectories — and the result is the union of each boundary segment's
/// own placement. A zero-length, zero-velocity line needs no special case:
/// every boundary segment degenerates to the same point, and the
/// point-in-half-plane comparisons below already do the right thing for a
/// single point.
pub(crate) fn place_line_in_branches(
    line: &Line,
    rect: &Rect,
    dt: f64,
    transform: &impl CoordinateTransform,
) -> BranchFlags {
    let advanced = line.advanced(dt);

    // The four boundary segments of the swept parallelogram: the segment at
    // time 0, the segment at time `dt`, and the two endpoint trajectories.
    let boundary_segments =
        [(line.p1, line.p2), (advanced.p1, advanced.p2), (line.p1, advanced.p1), (line.p2, advanced.p2)];

    boundary_segments
        .iter()
        .map(|&(a, b)| {
            let a = transform.box_to_window(a);
            let b = transform.box_to_window(b);
            place_segment_in_branches(a, b, rect)
        })
        .fold(BranchFlags::default(), BranchFlags::union)
}

fn place_segment_in_branches(p1: Vec2, p2: Vec2, rect: &Rect) -> BranchFlags {
    let dy = p1.y - p2.y;
    let dx = p1.x - p2.x;
    let mid_x = f64::from(rect.mid_x);
    let mid_y = f64::from(rect.mid_y);

    if dx == 0.0 {
        BranchFlags {
            tl: p1.x <= mid_x && (p1.y <= mid_y || p2.y <= mid_y),
            bl: p1.x <= mid_x && (p1.y >= mid_y || p2.y >= mid_y),
            br: p1.x >= mid_x && (p1.y >= mid_y || p2.y >= mid_y),
            tr: p1.x >= mid_x && (p1.y <= mid_y || p2.y <= mid_y),
        }
    } else if dy == 0.0 {
        BranchFlags {
            tl: p1.y <= mid_y && (p1.x <= mid_x || p2.x <= mid_x),
            tr: p1.y <= mid_y && (p1.x >= mid_x || p2.x >= mid_x),
            bl: p1.y >= mid_y && (p1.x <= mid_x || p2.x <= mid_x),
            br: p1.y >= mid_y && (p1.x >= mid_x || p2.x >= mid_x),
        }
    } else {
        // Evaluate the line at the parent's left, middle, and right edges to
        // get three y-values, then combine with which half-plane the
        // endpoints fall in. The sign of the slope selects one of two
        // symmetric rule sets.
        let slope = dy / dx;
        let left_x = f64::from(rect.mid_x - rect.size_x);
        let right_x = f64::from(rect.mid_x + rect.size_x);
        let y_at_left = slope * (left_x - p1.x) + p1.y;
        let y_at_mid = slope * (mid_x - p1.x) + p1.y;
        let y_at_right = slope * (right_x - p1.x) + p1.y;
        let top_y = f64::from(rect.mid_y - rect.size_y);
        let bottom_y = f64::from(rect.mid_y + rect.size_y);

        let left_half = p1.x <= mid_x || p2.x <= mid_x;
        let right_half = p1.x >= mid_x || p2.x >= mid_x;
        let top_half = p1.y <= mid_y || p2.y <= mid_y;
        let bottom_half = p1.y >= mid_y || p2.y >= mid_y;

        if slope > 0.0 {
            BranchFlags {
                tl: y_at_left <= mid_y && y_at_mid >= top_y && left_half && top_half,
                bl: y_at_mid >= mid_y && left_half && bottom_half,
                br: y_at_mid <= bottom_y && y_at_right >= mid_y && right_half && bottom_half,
                tr: y_at_mid <= mid_y && right_half && top_half,
            }
        } else {
            BranchFlags {
                tl: y_at_mid <= mid_y && left_half && top_half,
                bl: y_at_left >= mid_y && y_at_mid <= bottom_y && left_half && bottom_half,
                br: y_at_mid >= mid_y && right_half && bottom_half,
                tr: y_at_mid >= top_y && y_at_right <= mid_y && right_half && top_half,
            }
        }
    }
}

#[cfg(test)]
mod tests;
