//! Vector — rank-addressed dynamic array with explicit capacity management.
//!
//! Variables:
//!   elems    : Vec<T>  — logical sequence, elems.len() = N (size)
//!   C        : usize   — tracked capacity, elems reserved to exactly C slots
//!   F        : usize   — capacity floor, F >= 1
//!
//! Invariants:
//!   0 <= N <= C,   F <= C
//!   elements only change buffers inside reallocate()
//!
//! Equations:
//!   expand():  N == C            => C' = max(C, F) * 2         O(N)
//!   shrink():  C >= 2F, 4N <= C  => C' = C / 2                 O(N)
//!   n appends cost O(n) in total (doubling)
//!
//! Rank-taking operations validate at the boundary and report
//! [`VectorError`](crate::error::VectorError); internal helpers trust
//! already-checked ranks.

mod dedup;
mod mutation;
mod ordering;

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::rngs::StdRng;

use crate::config::VectorConfig;
use crate::error::{Result, VectorError};
use crate::sorting::SortStrategy;

pub struct Vector<T> {
    elems: Vec<T>,
    capacity: usize,
    floor: usize,
    strategy: SortStrategy,
    rng: StdRng,
}

impl<T> Vector<T> {
    /// Empty vector with the default floor as its capacity.
    pub fn new() -> Self {
        Self::with_config(VectorConfig::default())
    }

    pub fn with_config(config: VectorConfig) -> Self {
        let floor = config.effective_floor();
        Self::allocate(floor, &config)
    }

    /// Empty vector with room for `capacity` elements (never below the floor).
    pub fn with_capacity(capacity: usize) -> Self {
        let config = VectorConfig::default();
        Self::allocate(capacity.max(config.effective_floor()), &config)
    }

    fn allocate(capacity: usize, config: &VectorConfig) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
            capacity,
            floor: config.effective_floor(),
            strategy: config.sort_strategy,
            rng: config.rng(),
        }
    }

    /// Re-apply `config` to an existing vector.
    ///
    /// A larger floor grows the buffer to it immediately; the elements are
    /// kept as they are.
    pub fn configured(mut self, config: VectorConfig) -> Self {
        self.floor = config.effective_floor();
        self.strategy = config.sort_strategy;
        self.rng = config.rng();
        if self.capacity < self.floor {
            let floor = self.floor;
            self.reallocate(floor);
        }
        self
    }

    pub fn size(&self) -> usize {
        self.elems.len()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn sort_strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Apply `visit` to every element in rank order, with in-place write access.
    pub fn traverse<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        for x in self.elems.iter_mut() {
            visit(x);
        }
    }

    pub fn traverse_ref<F: FnMut(&T)>(&self, mut visit: F) {
        for x in self.elems.iter() {
            visit(x);
        }
    }

    // ---- storage manager ----

    fn reallocate(&mut self, capacity: usize) {
        let mut fresh = Vec::with_capacity(capacity);
        fresh.extend(self.elems.drain(..));
        self.elems = fresh;
        self.capacity = capacity;
    }

    /// Double the buffer when full.
    fn expand(&mut self) {
        if self.elems.len() < self.capacity {
            return;
        }
        let old = self.capacity;
        let new = old.max(self.floor) * 2;
        self.reallocate(new);
        tracing::debug!(old_capacity = old, new_capacity = new, size = self.elems.len(), "vector expanded");
    }

    /// Halve the buffer when at most a quarter full, never below the floor.
    fn shrink(&mut self) {
        if self.capacity < self.floor * 2 || self.elems.len() * 4 > self.capacity {
            return;
        }
        let old = self.capacity;
        let new = old / 2;
        self.reallocate(new);
        tracing::debug!(old_capacity = old, new_capacity = new, size = self.elems.len(), "vector shrunk");
    }

    fn check_rank(&self, rank: usize) -> Result<()> {
        if rank >= self.elems.len() {
            return Err(VectorError::OutOfRange { rank, bound: self.elems.len() });
        }
        Ok(())
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<()> {
        if lo > hi {
            return Err(VectorError::InvalidRange { lo, hi });
        }
        if hi > self.elems.len() {
            return Err(VectorError::OutOfRange { rank: hi, bound: self.elems.len() });
        }
        Ok(())
    }
}

impl<T: Clone> Vector<T> {
    /// Capacity `capacity` (at least the floor) holding `size` copies of `value`.
    pub fn with_fill(capacity: usize, size: usize, value: T) -> Result<Self> {
        if size > capacity {
            return Err(VectorError::OutOfRange { rank: size, bound: capacity });
        }
        let mut v = Self::with_capacity(capacity);
        v.elems.resize(size, value);
        Ok(v)
    }

    pub fn from_slice(items: &[T]) -> Self {
        Self::copied(items, VectorConfig::default())
    }

    /// Copy of `items[lo, hi)`.
    pub fn from_range(items: &[T], lo: usize, hi: usize) -> Result<Self> {
        if lo > hi {
            return Err(VectorError::InvalidRange { lo, hi });
        }
        if hi > items.len() {
            return Err(VectorError::OutOfRange { rank: hi, bound: items.len() });
        }
        Ok(Self::from_slice(&items[lo..hi]))
    }

    /// Independent copy of ranks `[lo, hi)`, sharing this vector's settings.
    pub fn sub_vector(&self, lo: usize, hi: usize) -> Result<Self> {
        self.check_range(lo, hi)?;
        Ok(self.copy_of(&self.elems[lo..hi]))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.elems.clone()
    }

    // copies reserve twice the copied length
    fn copied(items: &[T], config: VectorConfig) -> Self {
        let capacity = (2 * items.len()).max(config.effective_floor());
        let mut v = Self::allocate(capacity, &config);
        v.elems.extend_from_slice(items);
        v
    }

    fn copy_of(&self, items: &[T]) -> Self {
        let capacity = (2 * items.len()).max(self.floor);
        let mut elems = Vec::with_capacity(capacity);
        elems.extend_from_slice(items);
        Self {
            elems,
            capacity,
            floor: self.floor,
            strategy: self.strategy,
            rng: self.rng.clone(),
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.copy_of(&self.elems)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("elems", &self.elems)
            .field("size", &self.elems.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// Panics unless `rank < size()`; use [`Vector::get`] for a checked read.
    fn index(&self, rank: usize) -> &T {
        match self.elems.get(rank) {
            Some(x) => x,
            None => panic!("rank {rank} out of range (size {})", self.elems.len()),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, rank: usize) -> &mut T {
        let size = self.elems.len();
        match self.elems.get_mut(rank) {
            Some(x) => x,
            None => panic!("rank {rank} out of range (size {size})"),
        }
    }
}
