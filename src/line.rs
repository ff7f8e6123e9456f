//! The external, read-only payload the quadtree indexes.
//!
//! Everything here is owned by the host (the physics/event-loop layer); the
//! core only ever borrows it for the duration of a single call. See the
//! module docs on [`Quadtree`](crate::quadtree::Quadtree) for the borrow
//! discipline.

use core::ops::{Add, Mul};

/// A 2D point or vector in whatever coordinate system the caller is using.
///
/// The quadtree is agnostic to units; box vs. window coordinates are
/// distinguished only by which side of [`CoordinateTransform`] they're on.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}
impl Vec2 {
    /// Shorthand constructor, mirroring the field order used throughout the
    /// original source's `(x, y)` literals.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// An opaque per-line tag, carried through the tree untouched.
///
/// The core never inspects this; it exists purely so callers don't have to
/// keep a side table mapping `id` back to a rendering color or similar.
pub type Color = u8;

/// A line segment with a constant per-step velocity.
///
/// `id` must match the segment's position in whatever external array the
/// [`Quadtree`](crate::quadtree::Quadtree) was constructed with — `Insert`
/// and `Query` both address lines by this id, not by value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line {
    /// One endpoint of the segment.
    pub p1: Vec2,
    /// The other endpoint of the segment.
    pub p2: Vec2,
    /// Constant per-step displacement added to both endpoints.
    pub velocity: Vec2,
    /// This line's position in the external array the tree was constructed
    /// with; `insert`/`query` address lines by this id, not by value.
    pub id: u32,
    /// Opaque tag carried through the tree untouched.
    pub color: Color,
}
impl Line {
    /// Returns the segment's position after advancing by `velocity * dt`.
    ///
    /// A zero-velocity line returns itself unchanged; no special-casing is
    /// needed, since multiplying by zero already does the right thing.
    #[inline]
    #[must_use]
    pub fn advanced(&self, dt: f64) -> Self {
        Self {
            p1: self.p1 + self.velocity * dt,
            p2: self.p2 + self.velocity * dt,
            ..*self
        }
    }
}
