//! A dynamic region quadtree over moving line segments, for broad-phase
//! collision candidate selection.
//!
//! # Overview
//! The crate is three arena-allocated pieces, each usable on its own:
//! - [`packed_vector`] — a small-buffer-optimized, contiguous vector
//!   ([`PackedVector`](packed_vector::PackedVector)).
//! - [`index_pool`] — a free-list allocator built on top of it
//!   ([`IndexPool`](index_pool::IndexPool)), handing out stable integer
//!   handles with O(1) insert/erase.
//! - [`quadtree`] — the tree itself
//!   ([`Quadtree`](quadtree::Quadtree)), which stores its nodes and element
//!   links in those two arenas instead of linking nodes through pointers or
//!   `Rc`.
//!
//! [`line`] and [`transform`] hold the collaborator types the tree is
//! generic over: a line segment with a constant velocity, and the
//! application-defined mapping between simulation space and the window
//! space the tree's splitting geometry operates in.
//!
//! # Feature flags
//! - `unwind_safety` (**enabled by default**) — catches panics at internal
//!   assertion boundaries and turns them into a process abort rather than an
//!   unwind, so a broken invariant can never be observed through a
//!   `catch_unwind` elsewhere with arena state half mutated.
//!
//! This crate is `std`-only: [`QuadTreeError`](error::QuadTreeError) derives
//! its `Display`/`Error` impls through `thiserror`, which itself requires
//! `std::error::Error`. A `no_std` build is not offered.
//!
//! # Public dependencies
//! - `smallvec` (**required**) — `^1.13`, backs [`PackedVector`](packed_vector::PackedVector).
//! - `thiserror` (**required**) — `^1.0`, the [`QuadTreeError`](error::QuadTreeError) type.
//! - `tracing` (**required**) — `^0.1`, structured logging at split/allocation sites.

#![warn(
    rust_2018_idioms,
    clippy::pedantic,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::unwrap_used, // Only .expect() allowed
)]
#![deny(anonymous_parameters, bare_trait_objects)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
)]

pub mod error;
pub mod index_pool;
pub mod line;
pub mod packed_vector;
pub mod quadtree;
pub mod transform;

pub(crate) mod util;

pub use error::QuadTreeError;
pub use quadtree::Quadtree;
