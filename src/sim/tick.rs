//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one step.

use super::collision::overlaps;
use super::source::SpawnSource;
use super::state::{GameEvent, GameState};
use crate::error::SimResult;

/// Input for a single tick, as sampled by the frontend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Unused by this game
    pub jump: bool,
    /// End the session
    pub quit: bool,
}

impl TickInput {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }
}

/// Whether the session should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Quit,
}

/// Negative, NaN and infinite steps advance nothing
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::debug!("Clamping invalid dt {dt} to 0");
        0.0
    }
}

/// Advance the game state by one timestep
///
/// Order: move player, drop coins, count misses, reset if out of lives,
/// spawn, then catch. A reset ends the tick early.
///
/// If the spawn timer expires with every slot in use, the rest of the tick
/// still runs and `SimError::PoolExhausted` is returned at the end.
pub fn tick<S: SpawnSource>(
    state: &mut GameState<S>,
    input: &TickInput,
    dt: f32,
) -> SimResult<TickStatus> {
    state.events.clear();
    if input.quit {
        return Ok(TickStatus::Quit);
    }

    let dt = sanitize_dt(dt);
    state.time_ticks += 1;

    state.player.move_by(dt, input.left, input.right);
    state.pool.advance_all(dt);

    // Misses
    let floor = state.tuning.screen_height;
    for slot in 0..state.pool.capacity() {
        let missed = state
            .pool
            .get(slot)
            .is_some_and(|c| c.active && c.pos.y > floor);
        if missed {
            state.pool.deactivate(slot);
            if let Some(lives) = state.lives.as_mut() {
                *lives -= 1;
            }
            state.events.push(GameEvent::CoinMissed { slot });
            log::debug!("Coin {slot} missed, lives {:?}", state.lives);
        }
    }

    if state.lives_exhausted() {
        state.resets += 1;
        log::info!("Out of lives with score {}, starting over", state.score);
        state.reset();
        state.events.push(GameEvent::Reset);
        return Ok(TickStatus::Running);
    }

    let mut fault = None;
    match state.spawner.tick(dt, &mut state.pool, &mut state.source) {
        Ok(Some(slot)) => {
            state.events.push(GameEvent::CoinSpawned { slot });
            log::debug!("Coin {slot} spawned");
        }
        Ok(None) => {}
        Err(err) => {
            log::warn!("Spawn skipped: {err}");
            fault = Some(err);
        }
    }

    // Catches
    let player = state.player.rect();
    for slot in 0..state.pool.capacity() {
        let caught = state
            .pool
            .get(slot)
            .is_some_and(|c| c.active)
            && state.pool.rect(slot).is_some_and(|r| overlaps(&player, &r));
        if caught {
            state.pool.deactivate(slot);
            state.score += 1;
            state.events.push(GameEvent::CoinCaught { slot });
            log::debug!("Coin {slot} caught, score {}", state.score);
        }
    }

    match fault {
        Some(err) => Err(err),
        None => Ok(TickStatus::Running),
    }
}
