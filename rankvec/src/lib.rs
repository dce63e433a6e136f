//! # rankvec
//!
//! Rank-addressed dynamic array with its bundled algorithm suite.
//!
//! ## Modules
//!
//! - `data_structures` – `Vector<T>`: storage manager, rank access & mutation, traversal, dedup
//! - `searching` – Backward linear scan, binary search, Fibonacci search
//! - `sorting` – Bubble, selection, insertion, shell, merge, quick, heap + `SortStrategy`
//! - `config` – `VectorConfig` (capacity floor, sort strategy, rng seed)
//! - `invariant` – Checkable ordering properties used by assertions and tests
//! - `error` – `VectorError`
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use rankvec::{SortStrategy, Vector};
//!
//! let mut v = Vector::new();
//! for (r, x) in [1, 3, 5, 7, 9].into_iter().enumerate() {
//!     v.insert(r, x).unwrap();
//! }
//! assert_eq!(v.search(&5), Some(2));
//! v.insert(2, 4).unwrap();
//! assert_eq!(v.remove_range(0, 2).unwrap(), 2);
//! assert_eq!(v.as_slice(), &[4, 5, 7, 9]);
//!
//! let mut w = Vector::from_slice(&[3, 1, 2]);
//! w.sort_with(SortStrategy::Heap);
//! assert_eq!(w.as_slice(), &[1, 2, 3]);
//! ```
//!
//! ---
//!
//! Single-threaded; every mutation takes `&mut self`.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod invariant;
pub mod searching;
pub mod sorting;

pub use config::{VectorConfig, DEFAULT_CAPACITY};
pub use data_structures::vector::Vector;
pub use error::{Result, VectorError};
pub use searching::SearchStrategy;
pub use sorting::SortStrategy;
