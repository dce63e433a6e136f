//! Search, sort and shuffle over rank ranges.
//!
//! Sentinels:
//!   find_in(e, lo, hi)   miss => lo - 1   (below the scanned range)
//!   search_in(e, lo, hi) miss => -1
//!
//! The two conventions are deliberately different and must not be mixed.

use rand::Rng;

use super::Vector;
use crate::error::Result;
use crate::invariant::{Ascending, Invariant};
use crate::searching::linear_search::find_last;
use crate::searching::{self, SearchStrategy};
use crate::sorting::{sort_slice, SortStrategy};

impl<T: PartialEq> Vector<T> {
    /// Rank of the rightmost `e` in `[lo, hi)`, or `lo - 1` when absent.
    pub fn find_in(&self, e: &T, lo: usize, hi: usize) -> Result<isize> {
        self.check_range(lo, hi)?;
        Ok(self.find_unchecked(e, lo, hi))
    }

    /// Rank of the rightmost `e` in the whole vector.
    pub fn find(&self, e: &T) -> Option<usize> {
        find_last(&self.elems, e)
    }

    pub(super) fn find_unchecked(&self, e: &T, lo: usize, hi: usize) -> isize {
        match find_last(&self.elems[lo..hi], e) {
            Some(i) => (lo + i) as isize,
            None => lo as isize - 1,
        }
    }
}

impl<T: Ord> Vector<T> {
    /// Binary search of ascending `[lo, hi)`; rank of an occurrence or -1.
    pub fn search_in(&self, e: &T, lo: usize, hi: usize) -> Result<isize> {
        self.search_with(e, lo, hi, SearchStrategy::Binary)
    }

    pub fn search_with(&self, e: &T, lo: usize, hi: usize, strategy: SearchStrategy) -> Result<isize> {
        self.check_range(lo, hi)?;
        let hit = searching::search(&self.elems[lo..hi], e, strategy).map(|i| lo + i);
        tracing::trace!(?strategy, lo, hi, ?hit, "ordered search");
        Ok(hit.map_or(-1, |r| r as isize))
    }

    /// Binary search of the whole (ascending) vector.
    pub fn search(&self, e: &T) -> Option<usize> {
        searching::binary_search::binary_search(&self.elems, e)
    }

    /// Number of adjacent inverted pairs; zero iff ascending.
    pub fn disordered(&self) -> usize {
        self.elems.windows(2).filter(|w| w[0] > w[1]).count()
    }

    pub fn is_sorted(&self) -> bool {
        Ascending.check(&self.elems[..])
    }
}

impl<T: Ord + Clone> Vector<T> {
    /// Sort the whole vector with the configured strategy.
    pub fn sort(&mut self) -> SortStrategy {
        let strategy = self.strategy;
        self.sort_with(strategy)
    }

    pub fn sort_with(&mut self, strategy: SortStrategy) -> SortStrategy {
        let hi = self.elems.len();
        self.sort_span(0, hi, strategy)
    }

    pub fn sort_range(&mut self, lo: usize, hi: usize) -> Result<SortStrategy> {
        let strategy = self.strategy;
        self.sort_range_with(lo, hi, strategy)
    }

    /// Sort ranks `[lo, hi)`; returns the algorithm that ran.
    pub fn sort_range_with(&mut self, lo: usize, hi: usize, strategy: SortStrategy) -> Result<SortStrategy> {
        self.check_range(lo, hi)?;
        Ok(self.sort_span(lo, hi, strategy))
    }

    fn sort_span(&mut self, lo: usize, hi: usize, strategy: SortStrategy) -> SortStrategy {
        let ran = sort_slice(&mut self.elems[lo..hi], strategy, &mut self.rng);
        debug_assert!(Ascending.check(&self.elems[lo..hi]), "{ran} sort left [{lo}, {hi}) unsorted");
        ran
    }
}

impl<T> Vector<T> {
    /// Uniformly shuffle the whole vector.
    pub fn unsort(&mut self) {
        let hi = self.elems.len();
        self.shuffle_span(0, hi);
    }

    pub fn unsort_range(&mut self, lo: usize, hi: usize) -> Result<()> {
        self.check_range(lo, hi)?;
        self.shuffle_span(lo, hi);
        Ok(())
    }

    // backward Fisher-Yates: V[i - 1] swaps with a uniform pick from V[0, i)
    fn shuffle_span(&mut self, lo: usize, hi: usize) {
        let span = &mut self.elems[lo..hi];
        for i in (1..=span.len()).rev() {
            span.swap(i - 1, self.rng.random_range(0..i));
        }
    }
}
