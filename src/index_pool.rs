//! Component B: a free-list allocator layered over a [`PackedVector`].
//!
//! Gives out stable integer handles for inserted records with O(1)
//! insert/erase, reusing holes in LIFO order. The C original threads the
//! free list through the freed slots' own memory, reinterpreting the first
//! word of a free slot as the next-free index. That reinterpretation is
//! sound in C because every record is raw bytes, but it is not something
//! safe Rust can do for an arbitrary `T` without extra unsafe machinery and
//! a `T: Copy + big enough` bound baked into the type signature. Instead
//! this follows the pattern `charcoal`'s own `SparseStorage`/`Slot<T>` use
//! for the same problem (`storage/list/sparse.rs`): a tagged enum,
//! `Slot::Free(next)` vs `Slot::Occupied(record)`. A parallel free list like
//! this is an established alternative to raw reinterpretation, with the
//! invariant easier to verify at the cost of a discriminant per slot.

use crate::error::QuadTreeError;
use crate::packed_vector::PackedVector;

#[derive(Copy, Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    /// Index of the next free slot, or `-1` if this is the tail of the free
    /// list. Mirrors the `-1`-terminated sentinel convention used elsewhere
    /// in the tree (`ElementLink::next`, `Node::first_child`).
    Free(i32),
}

/// A free-list allocator over a [`PackedVector`] of `Slot<T>`.
///
/// `N` is forwarded to the backing `PackedVector` as its inline capacity.
#[derive(Clone, Debug)]
pub struct IndexPool<T, const N: usize> {
    storage: PackedVector<Slot<T>, N>,
    first_free: i32,
}

impl<T, const N: usize> Default for IndexPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> IndexPool<T, N> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self { storage: PackedVector::new(), first_free: -1 }
    }

    /// Creates an empty pool with at least `capacity` slots of room.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if the allocator cannot
    /// satisfy the request.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, QuadTreeError> {
        Ok(Self { storage: PackedVector::try_with_capacity(capacity)?, first_free: -1 })
    }

    /// Inserts `record`, returning the (stable, until erased) index it now
    /// lives at. Reuses the most recently freed slot if one exists,
    /// otherwise extends the backing vector.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if the backing vector
    /// needs to grow and the allocator cannot satisfy it.
    pub fn insert(&mut self, record: T) -> Result<usize, QuadTreeError> {
        if self.first_free != -1 {
            let index = self.first_free as usize;
            let next_free = match self.storage.get_ref(index) {
                Slot::Free(next) => *next,
                Slot::Occupied(_) => unsafe {
                    crate::util::unreachable_debugchecked("free-list head pointed at an occupied slot")
                },
            };
            self.storage.set(index, Slot::Occupied(record));
            self.first_free = next_free;
            Ok(index)
        } else {
            self.storage.push_back(Slot::Occupied(record))?;
            Ok(self.storage.len() - 1)
        }
    }

    /// Borrows the record at `i`.
    ///
    /// # Panics
    /// It is a contract violation to read a freed slot; this panics in
    /// debug builds and is undefined behavior in release builds, exactly
    /// like an out-of-range [`PackedVector`] access.
    #[must_use]
    pub fn get_ref(&self, i: usize) -> &T {
        match self.storage.get_ref(i) {
            Slot::Occupied(v) => v,
            Slot::Free(_) => unsafe { crate::util::unreachable_debugchecked("read of a freed IndexPool slot") },
        }
    }

    /// Mutably borrows the record at `i`. See [`get_ref`](Self::get_ref) for
    /// the freed-slot contract.
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        match self.storage.get_mut(i) {
            Slot::Occupied(v) => v,
            Slot::Free(_) => unsafe { crate::util::unreachable_debugchecked("read of a freed IndexPool slot") },
        }
    }

    /// Copies the record at `i` out. See [`get_ref`](Self::get_ref) for the
    /// freed-slot contract.
    #[must_use]
    pub fn get_copy(&self, i: usize) -> T {
        *self.get_ref(i)
    }

    /// Marks slot `i` free, making it the new free-list head. O(1).
    ///
    /// # Panics
    /// Double-erasing an already-free index cannot be detected in O(1); this
    /// method only guards it with a linear [`is_free`](Self::is_free) check
    /// in debug builds. Callers are expected to simply never double-erase.
    pub fn erase(&mut self, i: usize) {
        debug_assert!(!self.is_free(i), "double-erase of IndexPool slot {i}");
        self.storage.set(i, Slot::Free(self.first_free));
        self.first_free = i as i32;
    }

    /// Walks the free list checking whether `i` is currently free.
    ///
    /// O(number of free slots) — present for debug assertions, not a fast
    /// path.
    #[must_use]
    pub fn is_free(&self, i: usize) -> bool {
        let mut cursor = self.first_free;
        while cursor != -1 {
            if cursor as usize == i {
                return true;
            }
            cursor = match self.storage.get_ref(cursor as usize) {
                Slot::Free(next) => *next,
                Slot::Occupied(_) => unsafe {
                    crate::util::unreachable_debugchecked("free-list link pointed at an occupied slot")
                },
            };
        }
        false
    }

    /// Empties the pool, preserving backing capacity.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.first_free = -1;
    }

    /// Releases backing capacity and empties the pool.
    pub fn free(&mut self) {
        self.storage.free();
        self.first_free = -1;
    }
}
