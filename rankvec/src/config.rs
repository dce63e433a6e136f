//! Construction-time knobs for [`Vector`](crate::Vector).
//!
//! Variables:
//!   capacity_floor : usize          — minimum physical capacity, clamped to >= 1
//!   sort_strategy  : SortStrategy   — algorithm used by `sort()`
//!   seed           : Option<u64>    — fixed rng seed; None seeds from the OS
//!
//! All fields default, so a partial JSON/TOML document is a valid config.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::sorting::SortStrategy;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub capacity_floor: usize,
    pub sort_strategy: SortStrategy,
    pub seed: Option<u64>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            capacity_floor: DEFAULT_CAPACITY,
            sort_strategy: SortStrategy::Random,
            seed: None,
        }
    }
}

impl VectorConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    pub fn with_floor(mut self, floor: usize) -> Self {
        self.capacity_floor = floor;
        self
    }

    /// Floor actually enforced by the storage manager.
    pub(crate) fn effective_floor(&self) -> usize {
        self.capacity_floor.max(1)
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
