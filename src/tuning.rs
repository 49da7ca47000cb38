//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be reconfigured from a
//! JSON file without touching the simulation. `Default` reproduces the
//! values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Win/lose rules for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rules {
    /// Each missed coin costs a life; running out resets the run
    Lives { initial: i32 },
    /// Misses are free, the score only ever goes up
    ScoreOnly,
}

impl Default for Rules {
    fn default() -> Self {
        Rules::Lives {
            initial: START_LIVES,
        }
    }
}

impl Rules {
    /// Lives at the start of a run (None when lives are not tracked)
    pub fn starting_lives(&self) -> Option<i32> {
        match self {
            Rules::Lives { initial } => Some(*initial),
            Rules::ScoreOnly => None,
        }
    }
}

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Pixels per second
    pub player_speed: f32,

    // === Coins ===
    /// Pool capacity, fixed for the lifetime of a game
    pub max_coins: usize,
    pub coin_width: f32,
    pub coin_height: f32,
    pub coin_spawn_y: f32,
    /// Pixels per second
    pub coin_fall_speed: f32,
    /// Seconds between spawns
    pub spawn_cooldown: f32,

    pub rules: Rules,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,

            max_coins: MAX_COINS,
            coin_width: COIN_WIDTH,
            coin_height: COIN_HEIGHT,
            coin_spawn_y: COIN_SPAWN_Y,
            coin_fall_speed: COIN_FALL_SPEED,
            spawn_cooldown: COIN_SPAWN_COOLDOWN,

            rules: Rules::default(),
        }
    }
}

impl Tuning {
    /// Default tuning with the score-only rules
    pub fn score_only() -> Self {
        Self {
            rules: Rules::ScoreOnly,
            ..Self::default()
        }
    }

    /// Top of the ground strip
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Exclusive upper bound for a coin's spawn x
    pub fn coin_spawn_x_max(&self) -> u32 {
        // validate() guarantees this is at least 1
        (self.screen_width - self.coin_width).max(1.0) as u32
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("coin_width", self.coin_width),
            ("coin_height", self.coin_height),
            ("coin_fall_speed", self.coin_fall_speed),
            ("spawn_cooldown", self.spawn_cooldown),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !(self.ground_height.is_finite() && self.ground_height >= 0.0) {
            return Err(invalid("ground_height", "must be zero or positive".into()));
        }
        if self.ground_height + self.player_height > self.screen_height {
            return Err(invalid(
                "ground_height",
                "player does not fit between ground and top of screen".into(),
            ));
        }
        if !self.coin_spawn_y.is_finite() {
            return Err(invalid("coin_spawn_y", "must be finite".into()));
        }
        if self.max_coins == 0 {
            return Err(invalid("max_coins", "pool needs at least one slot".into()));
        }
        if self.player_width > self.screen_width {
            return Err(invalid("player_width", "wider than the screen".into()));
        }
        if self.screen_width - self.coin_width < 1.0 {
            return Err(invalid(
                "coin_width",
                "leaves no room for a spawn position".into(),
            ));
        }
        if let Rules::Lives { initial } = self.rules {
            if initial < 0 {
                return Err(invalid("rules", format!("negative starting lives {initial}")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}
