//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Injected spawn source only (seeded RNG or a scripted sequence)
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod player;
pub mod pool;
pub mod source;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod view;

pub use autopilot::autopilot_input;
pub use collision::{Rect, overlaps};
pub use player::Player;
pub use pool::{Coin, CoinPool, CoinSpec};
pub use source::{SequenceSource, SpawnSource, seeded};
pub use spawner::Spawner;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, TickStatus, tick};
pub use view::{PlayerView, Snapshot};
