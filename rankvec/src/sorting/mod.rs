//! Comparison sorts over `&mut [T]` and the strategy that selects one.
//!
//! Every algorithm leaves its slice as an ascending permutation of the input.
//! Slices shorter than two elements are returned untouched.

pub mod bubble_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;
pub mod shell_sort;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::UnknownStrategy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
    /// Resolved per call, uniformly among [`SortStrategy::DISPATCHABLE`].
    #[default]
    Random,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 8] = [
        SortStrategy::Bubble,
        SortStrategy::Selection,
        SortStrategy::Insertion,
        SortStrategy::Shell,
        SortStrategy::Merge,
        SortStrategy::Quick,
        SortStrategy::Heap,
        SortStrategy::Random,
    ];

    /// Targets of `Random`. Shell sort only runs when pinned.
    pub const DISPATCHABLE: [SortStrategy; 6] = [
        SortStrategy::Bubble,
        SortStrategy::Selection,
        SortStrategy::Merge,
        SortStrategy::Heap,
        SortStrategy::Quick,
        SortStrategy::Insertion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::Bubble => "bubble",
            SortStrategy::Selection => "selection",
            SortStrategy::Insertion => "insertion",
            SortStrategy::Shell => "shell",
            SortStrategy::Merge => "merge",
            SortStrategy::Quick => "quick",
            SortStrategy::Heap => "heap",
            SortStrategy::Random => "random",
        }
    }

    /// Concrete algorithm this strategy runs; only `Random` consults the rng.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> SortStrategy {
        match self {
            SortStrategy::Random => {
                Self::DISPATCHABLE[rng.random_range(0..Self::DISPATCHABLE.len())]
            }
            concrete => concrete,
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Sort `arr` with `strategy`, returning the algorithm that actually ran.
pub fn sort_slice<T: Ord + Clone, R: Rng>(
    arr: &mut [T],
    strategy: SortStrategy,
    rng: &mut R,
) -> SortStrategy {
    let chosen = strategy.resolve(rng);
    tracing::trace!(requested = %strategy, chosen = %chosen, len = arr.len(), "sort dispatch");
    match chosen {
        SortStrategy::Bubble => bubble_sort::bubble_sort(arr),
        SortStrategy::Selection => selection_sort::selection_sort(arr),
        SortStrategy::Insertion => insertion_sort::insertion_sort(arr),
        SortStrategy::Shell => shell_sort::shell_sort(arr),
        SortStrategy::Merge => merge_sort::merge_sort(arr),
        SortStrategy::Quick => quick_sort::quick_sort(arr, rng),
        SortStrategy::Heap => heap_sort::heap_sort(arr),
        SortStrategy::Random => unreachable!("resolve() never yields Random"),
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Quick".parse::<SortStrategy>(), Ok(SortStrategy::Quick));
        assert_eq!(" shell ".parse::<SortStrategy>(), Ok(SortStrategy::Shell));
        assert!("bogo".parse::<SortStrategy>().is_err());
    }

    #[test]
    fn pinned_strategies_resolve_to_themselves() {
        let mut rng = StdRng::seed_from_u64(0);
        for s in SortStrategy::ALL.into_iter().filter(|s| *s != SortStrategy::Random) {
            assert_eq!(s.resolve(&mut rng), s);
        }
    }

    #[test]
    fn random_never_picks_shell() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let s = SortStrategy::Random.resolve(&mut rng);
            assert!(SortStrategy::DISPATCHABLE.contains(&s));
        }
    }
}
