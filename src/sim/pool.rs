//! Fixed-capacity coin pool
//!
//! Slots are allocated once when the pool is built and reused for the rest
//! of the game. A slot index is a coin's identity while it is active.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::source::SpawnSource;
use crate::error::{SimError, SimResult};
use crate::tuning::Tuning;

/// One falling coin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coin {
    pub active: bool,
    /// Top-left corner; meaningless while inactive
    pub pos: Vec2,
}

/// Geometry shared by every coin in a pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinSpec {
    pub size: Vec2,
    pub spawn_y: f32,
    /// Exclusive bound for spawn x
    pub spawn_x_max: u32,
    /// Pixels per second
    pub fall_speed: f32,
}

impl CoinSpec {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            size: Vec2::new(tuning.coin_width, tuning.coin_height),
            spawn_y: tuning.coin_spawn_y,
            spawn_x_max: tuning.coin_spawn_x_max(),
            fall_speed: tuning.coin_fall_speed,
        }
    }
}

/// Arena of coin slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinPool {
    slots: Box<[Coin]>,
    spec: CoinSpec,
}

impl CoinPool {
    /// Build a pool of `capacity` inactive slots
    pub fn new(capacity: usize, spec: CoinSpec) -> Self {
        Self {
            slots: vec![Coin::default(); capacity].into_boxed_slice(),
            spec,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn spec(&self) -> &CoinSpec {
        &self.spec
    }

    pub fn get(&self, slot: usize) -> Option<&Coin> {
        self.slots.get(slot)
    }

    /// All slots, active or not, in slot order
    pub fn slots(&self) -> &[Coin] {
        &self.slots
    }

    /// Active coins with their slot index, in slot order
    pub fn active(&self) -> impl Iterator<Item = (usize, &Coin)> {
        self.slots.iter().enumerate().filter(|(_, c)| c.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|c| c.active).count()
    }

    /// Bounding box of the coin in `slot`
    pub fn rect(&self, slot: usize) -> Option<Rect> {
        self.slots
            .get(slot)
            .map(|c| Rect::from_pos_size(c.pos, self.spec.size))
    }

    /// Place a coin above the screen at a random x and activate it
    ///
    /// Only meant for inactive slots (or while resetting). Out-of-range slots
    /// are ignored.
    pub fn spawn<S: SpawnSource + ?Sized>(&mut self, slot: usize, source: &mut S) {
        let Some(coin) = self.slots.get_mut(slot) else {
            log::warn!("Ignoring spawn into nonexistent slot {slot}");
            return;
        };
        debug_assert!(!coin.active, "spawn into active slot {slot}");
        let x = source.spawn_x(self.spec.spawn_x_max);
        coin.pos = Vec2::new(x as f32, self.spec.spawn_y);
        coin.active = true;
    }

    /// Spawn into the lowest inactive slot
    pub fn spawn_next<S: SpawnSource + ?Sized>(&mut self, source: &mut S) -> SimResult<usize> {
        let slot = self.find_first_inactive().ok_or(SimError::PoolExhausted {
            capacity: self.capacity(),
        })?;
        self.spawn(slot, source);
        Ok(slot)
    }

    /// Move every active coin down by `fall_speed * dt`
    pub fn advance_all(&mut self, dt: f32) {
        let dy = self.spec.fall_speed * dt;
        for coin in self.slots.iter_mut().filter(|c| c.active) {
            coin.pos.y += dy;
        }
    }

    /// Lowest inactive slot, or None when the pool is saturated
    pub fn find_first_inactive(&self) -> Option<usize> {
        self.slots.iter().position(|c| !c.active)
    }

    /// Idempotent; out-of-range slots are ignored
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(coin) = self.slots.get_mut(slot) {
            coin.active = false;
        }
    }

    /// Deactivate everything and put a single fresh coin in slot 0
    pub fn reseed<S: SpawnSource + ?Sized>(&mut self, source: &mut S) {
        for coin in self.slots.iter_mut() {
            coin.active = false;
        }
        self.spawn(0, source);
    }

    /// Force a slot active at a known position (scenario setup, replays)
    pub fn place(&mut self, slot: usize, pos: Vec2) {
        if let Some(coin) = self.slots.get_mut(slot) {
            coin.pos = pos;
            coin.active = true;
        }
    }
}
