pub mod binary_search;
pub mod fibonacci_search;
pub mod linear_search;

use serde::{Deserialize, Serialize};

/// Ordered-search algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    Binary,
    Fibonacci,
}

/// Search an ascending slice with the chosen algorithm.
pub fn search<T: Ord>(arr: &[T], target: &T, strategy: SearchStrategy) -> Option<usize> {
    match strategy {
        SearchStrategy::Binary => binary_search::binary_search(arr, target),
        SearchStrategy::Fibonacci => fibonacci_search::fibonacci_search(arr, target),
    }
}
