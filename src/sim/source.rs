//! Randomness for coin spawn positions
//!
//! The simulation only ever asks for one thing: a horizontal spawn position.
//! Any `rand` generator can answer; tests script the answers instead.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Supplies spawn x positions
pub trait SpawnSource {
    /// Uniform integer in `[0, max_exclusive)`; `max_exclusive` is never 0
    fn spawn_x(&mut self, max_exclusive: u32) -> u32;
}

impl<R: RngCore> SpawnSource for R {
    fn spawn_x(&mut self, max_exclusive: u32) -> u32 {
        self.random_range(0..max_exclusive.max(1))
    }
}

/// Default seeded generator for a run
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of spawn positions, cycling when exhausted
///
/// Values are reduced modulo the requested bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSource {
    values: Vec<u32>,
    next: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of positions handed out so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl SpawnSource for SequenceSource {
    fn spawn_x(&mut self, max_exclusive: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % max_exclusive.max(1)
    }
}
