//! Gopher Rain - catch the falling coins
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, coin pool, spawner, game state)
//! - `session`: Fixed timestep driver for an external frame pump
//! - `tuning`: Data-driven game balance
//! - `error`: Simulation and configuration errors

pub mod error;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{SimError, TuningError};
pub use session::{Session, SessionStatus};
pub use tuning::{Rules, Tuning};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the session will try to catch up on
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Ground strip along the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Gopher sprite is 14x14 pixels drawn at 3.5x
    pub const PLAYER_PIXELS: f32 = 14.0;
    pub const PLAYER_SCALE: f32 = 3.5;
    pub const PLAYER_WIDTH: f32 = PLAYER_PIXELS * PLAYER_SCALE;
    pub const PLAYER_HEIGHT: f32 = PLAYER_PIXELS * PLAYER_SCALE;
    /// Horizontal speed (pixels per second)
    pub const PLAYER_SPEED: f32 = 450.0;

    /// Coin pool capacity
    pub const MAX_COINS: usize = 10;
    pub const COIN_WIDTH: f32 = 54.0;
    pub const COIN_HEIGHT: f32 = 54.0;
    /// Coins appear above the top edge
    pub const COIN_SPAWN_Y: f32 = -100.0;
    /// Fall speed (pixels per second)
    pub const COIN_FALL_SPEED: f32 = 100.0;
    /// Seconds between spawns
    pub const COIN_SPAWN_COOLDOWN: f32 = 1.5;

    /// Lives at the start of a run
    pub const START_LIVES: i32 = 3;
}
