//! The box-coordinate ↔ window-coordinate transform, injected from outside
//! the core.
//!
//! The exact definition of this transform lives with the physics layer: the
//! core only needs *a* pure function in each direction, not an opinion on
//! what a "box" or "window" coordinate means. Modeling it as a
//! trait (rather than taking two `fn` pointers) lets a caller bundle the
//! transform with whatever state it's derived from (e.g. a viewport size)
//! without the quadtree needing to know about it.

use crate::line::Vec2;

/// A pure, stateless coordinate transform between box and window space.
///
/// Implementations must be pure: the quadtree may call either method any
/// number of times per insert/query and assumes repeated calls with the same
/// input produce the same output.
pub trait CoordinateTransform {
    /// Box coordinates → window coordinates. The quadtree stores and reasons
    /// about window coordinates exclusively; this is called once per
    /// endpoint of each of the four boundary segments of a swept
    /// parallelogram.
    fn box_to_window(&self, point: Vec2) -> Vec2;

    /// Window coordinates → box coordinates. Provided for symmetry and for
    /// hosts that need to map a tree-space rectangle (e.g. from
    /// [`get_rect_line_segments`](crate::quadtree::Quadtree::get_rect_line_segments))
    /// back into physics space; the core itself never calls this, since it
    /// only ever stores and queries in window coordinates.
    fn window_to_box(&self, point: Vec2) -> Vec2;
}

/// The trivial transform: box and window coordinates are identical.
///
/// Useful for tests and for hosts whose physics simulation already runs in
/// window space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IdentityTransform;
impl CoordinateTransform for IdentityTransform {
    #[inline]
    fn box_to_window(&self, point: Vec2) -> Vec2 {
        point
    }
    #[inline]
    fn window_to_box(&self, point: Vec2) -> Vec2 {
        point
    }
}
