//! Component C: a dynamic region quadtree over moving line segments, used
//! for broad-phase collision candidate selection.
//!
//! A node is either a leaf (a bucket of line references) or a branch (four
//! children, `{TL, BL, BR, TR}`). A line is swept over a timestep `dt` into a
//! parallelogram and placed into every leaf that parallelogram's boundary
//! touches; a leaf holding more lines than `max_elements_per_leaf` splits
//! into a branch, provided it hasn't hit `max_depth`.
//!
//! # Example
//! ```rust
//! use sweep_quadtree::line::{Line, Vec2};
//! use sweep_quadtree::transform::IdentityTransform;
//! use sweep_quadtree::quadtree::Quadtree;
//!
//! let lines = [
//!     Line { p1: Vec2::new(10.0, 10.0), p2: Vec2::new(20.0, 10.0), velocity: Vec2::new(1.0, 0.0), id: 0, color: 0 },
//!     Line { p1: Vec2::new(900.0, 900.0), p2: Vec2::new(910.0, 910.0), velocity: Vec2::default(), id: 1, color: 0 },
//! ];
//!
//! // A leaf holding more than one line splits immediately, pushing these two
//! // far-apart lines into separate quadrants.
//! let mut tree = Quadtree::new(&lines, 1024, 1024, 8, 1, IdentityTransform).unwrap();
//! tree.insert(0, 1.0).unwrap();
//! tree.insert(1, 1.0).unwrap();
//!
//! // The two lines sit in different quadrants, so neither is a candidate for the other.
//! assert!(tree.query(0, 1.0).is_empty());
//! ```

mod base;
mod node;
mod rect;

pub use base::Quadtree;
pub use rect::{Quadrant, Rect};
