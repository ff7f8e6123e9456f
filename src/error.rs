//! Error taxonomy for the quadtree core.
//!
//! Contract violations (out-of-range indices, `Δt < 0`, double-erase) are
//! programmer errors, not recoverable conditions: they are caught with
//! assertions (debug builds) or fall into
//! [`crate::util::unreachable_debugchecked`] (release builds), never returned
//! as a value. The only failure mode surfaced to callers is allocator
//! exhaustion during arena growth.

use thiserror::Error;

/// Failure surfaced from operations that grow an arena.
///
/// This is the sole variant kind because it is the sole recoverable failure
/// mode: index-pool and packed-vector growth can, in principle, fail to
/// obtain memory. When that happens mid-[`split`], the former leaf may
/// already be a branch with fewer than the expected number of re-inserted
/// elements; such an exhaustion is treated as terminal for the operation
/// rather than attempting to unwind the partial split.
///
/// [`split`]: crate::quadtree::Quadtree::insert
#[derive(Debug, Error)]
pub enum QuadTreeError {
    /// A backing arena ([`PackedVector`] or [`IndexPool`]) could not grow to
    /// accommodate a new record.
    ///
    /// [`PackedVector`]: crate::packed_vector::PackedVector
    /// [`IndexPool`]: crate::index_pool::IndexPool
    #[error("arena allocation failed while growing to {attempted_capacity} records ({context})")]
    ResourceExhaustion {
        /// The capacity the arena was attempting to reach.
        attempted_capacity: usize,
        /// Which operation triggered the growth, for diagnostics.
        context: &'static str,
    },
}
