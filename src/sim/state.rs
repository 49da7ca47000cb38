//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; it owns the player, the
//! coin pool and the spawn source outright.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::pool::{CoinPool, CoinSpec};
use super::source::{SpawnSource, seeded};
use super::spawner::Spawner;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinSpawned { slot: usize },
    CoinCaught { slot: usize },
    /// Coin fell past the bottom of the screen
    CoinMissed { slot: usize },
    /// Lives ran out and the run started over
    Reset,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState<S = Pcg32> {
    pub tuning: Tuning,
    pub score: u32,
    /// None under [`crate::Rules::ScoreOnly`]
    pub lives: Option<i32>,
    pub player: Player,
    pub pool: CoinPool,
    pub spawner: Spawner,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of times lives ran out
    pub resets: u32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) source: S,
}

impl GameState<Pcg32> {
    /// Default tuning, spawn positions from a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seeded(seed))
    }
}

impl<S: SpawnSource> GameState<S> {
    /// Validate `tuning` and start a fresh run with the given spawn source
    pub fn with_source(tuning: Tuning, source: S) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, source))
    }

    fn build(tuning: Tuning, source: S) -> Self {
        let mut state = Self {
            score: 0,
            lives: tuning.rules.starting_lives(),
            player: Player::new(&tuning),
            pool: CoinPool::new(tuning.max_coins, CoinSpec::from_tuning(&tuning)),
            spawner: Spawner::new(tuning.spawn_cooldown),
            time_ticks: 0,
            resets: 0,
            events: Vec::with_capacity(tuning.max_coins + 2),
            source,
            tuning,
        };
        state.reset();
        log::info!(
            "New game: {} coin slots, lives {:?}",
            state.pool.capacity(),
            state.lives
        );
        state
    }

    /// Start the run over: score, lives, coins, spawn timer and player
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.rules.starting_lives();
        self.pool.reseed(&mut self.source);
        self.spawner.rearm();
        self.player.recenter();
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True once lives have gone below zero (reset is due)
    pub fn lives_exhausted(&self) -> bool {
        self.lives.is_some_and(|lives| lives < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::source::SequenceSource;
    use crate::tuning::Rules;

    #[test]
    fn test_new_game_has_one_coin() {
        let state = GameState::new(12345);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, Some(3));
        assert_eq!(state.pool.active_count(), 1);
        assert!(state.pool.get(0).is_some_and(|c| c.active));
        assert_eq!(state.spawner.cooldown, 1.5);
        assert_eq!(state.player.x, 320.0);
    }

    #[test]
    fn test_with_source_rejects_bad_tuning() {
        let tuning = Tuning {
            max_coins: 0,
            ..Tuning::default()
        };
        assert!(GameState::with_source(tuning, SequenceSource::new([1])).is_err());
    }

    #[test]
    fn test_score_only_tracks_no_lives() {
        let state = GameState::with_source(Tuning::score_only(), SequenceSource::new([1]))
            .expect("valid tuning");
        assert_eq!(state.lives, None);
        assert!(!state.lives_exhausted());
    }

    #[test]
    fn test_reset_restores_start_of_run() {
        let tuning = Tuning {
            rules: Rules::Lives { initial: 5 },
            ..Tuning::default()
        };
        let mut state =
            GameState::with_source(tuning, SequenceSource::new([11, 22])).expect("valid tuning");
        state.score = 17;
        state.lives = Some(-1);
        state.spawner.cooldown = -0.2;
        state.player.x = 0.0;
        state.pool.place(3, glam::Vec2::new(5.0, 5.0));

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, Some(5));
        assert_eq!(state.spawner.cooldown, 1.5);
        assert_eq!(state.player.x, 320.0);
        assert_eq!(state.pool.active_count(), 1);
        assert_eq!(state.pool.get(0).map(|c| c.pos.x), Some(22.0));
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(1);
        let json: serde_json::Value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["score"], 0);
        assert_eq!(json["lives"], 3);
        assert!(json.get("source").is_none());
    }
}
