//! Cooldown-gated coin spawner
//!
//! A single global timer, not one per slot: at most one coin appears per
//! cooldown period no matter how large the pool is.

use serde::{Deserialize, Serialize};

use super::pool::CoinPool;
use super::source::SpawnSource;
use crate::error::SimResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next spawn; may dip below zero before re-arming
    pub cooldown: f32,
    /// Seconds between spawns
    pub period: f32,
}

impl Spawner {
    /// Armed spawner, first coin due after one full period
    pub fn new(period: f32) -> Self {
        Self {
            cooldown: period,
            period,
        }
    }

    pub fn rearm(&mut self) {
        self.cooldown = self.period;
    }

    /// Count down and spawn when the timer expires
    ///
    /// Returns the spawned slot. If the timer expires with no free slot the
    /// pool is left as it was, the timer is held at zero, and the spawn is
    /// retried on the next tick.
    pub fn tick<S: SpawnSource + ?Sized>(
        &mut self,
        dt: f32,
        pool: &mut CoinPool,
        source: &mut S,
    ) -> SimResult<Option<usize>> {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return Ok(None);
        }

        let slot = match pool.spawn_next(source) {
            Ok(slot) => slot,
            Err(err) => {
                // Stay expired without drifting further negative
                self.cooldown = self.cooldown.max(0.0);
                return Err(err);
            }
        };
        self.rearm();
        Ok(Some(slot))
    }
}
