//! Component A: a contiguous, growable sequence of fixed-size records with
//! small-buffer optimization.
//!
//! The first few records live inline in the value itself; once that's
//! exhausted, storage spills to the heap and grows geometrically from there.
//! This is exactly what [`SmallVec`] already does, so rather than
//! reimplementing the buffer/spill dance by hand (as the C original does in
//! `small_list.c`, reinterpreting a raw `char buffer[256]`), `PackedVector`
//! is a thin domain-specific wrapper around it. The inline capacity `N` is
//! chosen per arena so that `N * size_of::<T>()` lands near a ~256-byte
//! budget (see the `NODE_INLINE_CAPACITY`/`ELEMENT_INLINE_CAPACITY`
//! constants in [`crate::quadtree`]).
//!
//! # Reference invalidation hazard
//! [`get_ref`](Self::get_ref) and [`get_mut`](Self::get_mut) borrow `self`.
//! Rust's borrow checker turns the "references are invalidated by any
//! mutating call" hazard into a compile error rather than a documentation
//! note — any code that tries to hold a `&Node` across an `insert_into_leaf`
//! split simply won't compile, which is the point of working with arenas in
//! a borrow-checked language at all.

use smallvec::SmallVec;

use crate::error::QuadTreeError;

/// A packed, small-buffer-optimized vector of `T`.
///
/// `N` is the inline capacity: while `len() <= N`, no heap allocation has
/// occurred. Growing past `N` spills to the heap and doubles from there,
/// matching `SmallList_Resize`'s geometric growth in the original source.
#[derive(Clone, Debug)]
pub struct PackedVector<T, const N: usize> {
    data: SmallVec<[T; N]>,
}

impl<T, const N: usize> Default for PackedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> PackedVector<T, N> {
    /// Creates an empty vector; no heap allocation happens until growth past
    /// the inline capacity `N`.
    #[must_use]
    pub fn new() -> Self {
        Self { data: SmallVec::new() }
    }

    /// Creates an empty vector with at least `capacity` records of room.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if the allocator cannot
    /// satisfy the request.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, QuadTreeError> {
        let mut data = SmallVec::new();
        data.try_reserve(capacity).map_err(|_| QuadTreeError::ResourceExhaustion {
            attempted_capacity: capacity,
            context: "PackedVector::try_with_capacity",
        })?;
        Ok(Self { data })
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity (inline or spilled).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Whether storage has spilled to the heap. Exposed mainly for tests
    /// that want to assert the small-buffer optimization is actually
    /// engaging.
    #[must_use]
    pub fn is_spilled(&self) -> bool {
        self.data.spilled()
    }

    /// Appends `record` to the end. Amortized O(1); may trigger a geometric
    /// grow (doubling) if at capacity.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if growth is needed and
    /// the allocator cannot satisfy it. The vector is left unchanged on
    /// error.
    pub fn push_back(&mut self, record: T) -> Result<(), QuadTreeError> {
        if self.data.len() == self.data.capacity() {
            let new_cap = (self.data.capacity() * 2).max(N + 1);
            self.data.try_reserve(new_cap - self.data.len()).map_err(|_| QuadTreeError::ResourceExhaustion {
                attempted_capacity: new_cap,
                context: "PackedVector::push_back",
            })?;
        }
        self.data.push(record);
        Ok(())
    }

    /// Borrows the record at `i`.
    ///
    /// # Panics
    /// Panics (via [`crate::util::unreachable_debugchecked`] in release
    /// builds, where it is instead undefined behavior) if `i >= len()` — an
    /// out-of-range index is a contract violation, not a recoverable error.
    #[must_use]
    pub fn get_ref(&self, i: usize) -> &T {
        match self.data.get(i) {
            Some(r) => r,
            None => unsafe { crate::util::unreachable_debugchecked("PackedVector index out of range") },
        }
    }

    /// Mutably borrows the record at `i`. See [`get_ref`](Self::get_ref) for
    /// the out-of-range contract.
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        match self.data.get_mut(i) {
            Some(r) => r,
            None => unsafe { crate::util::unreachable_debugchecked("PackedVector index out of range") },
        }
    }

    /// Overwrites the record at `i` in place.
    pub fn set(&mut self, i: usize, record: T) {
        *self.get_mut(i) = record;
    }

    /// Grows capacity to at least `new_cap`, doing nothing if `new_cap` is
    /// not larger than the current capacity (shrinking is never performed,
    /// matching `SmallList_Resize`).
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if the allocator cannot
    /// satisfy the request.
    pub fn resize(&mut self, new_cap: usize) -> Result<(), QuadTreeError> {
        if new_cap > self.data.capacity() {
            self.data.try_reserve(new_cap - self.data.len()).map_err(|_| QuadTreeError::ResourceExhaustion {
                attempted_capacity: new_cap,
                context: "PackedVector::resize",
            })?;
        }
        Ok(())
    }

    /// Sets the length to zero. Capacity (inline or spilled) is preserved.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Releases any spilled heap storage, returning the vector to its
    /// initial inline-capacity state.
    pub fn free(&mut self) {
        self.data = SmallVec::new();
    }
}

impl<T: Copy, const N: usize> PackedVector<T, N> {
    /// Copies the record at `i` out. See [`get_ref`](Self::get_ref) for the
    /// out-of-range contract.
    #[must_use]
    pub fn get_copy(&self, i: usize) -> T {
        *self.get_ref(i)
    }

    /// Removes and returns the last record, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.data.pop()
    }
}
