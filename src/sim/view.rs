//! Read-only view of a game state for the presentation layer
//!
//! The renderer draws from a [`Snapshot`] and never reaches back into the
//! simulation.

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::state::GameState;

/// What to draw for the gopher
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub facing_right: bool,
}

impl PlayerView {
    /// Horizontal scale sign and x offset for the sprite
    ///
    /// The sprite art faces left, so facing right draws it mirrored and
    /// shifted by one sprite width to keep it in place.
    pub fn sprite_flip(&self) -> (f32, f32) {
        if self.facing_right {
            (-1.0, self.rect.size.x)
        } else {
            (1.0, 0.0)
        }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    /// Top-left corners of the active coins, in slot order
    pub coins: Vec<Vec2>,
    pub coin_size: Vec2,
    pub score: u32,
    pub lives: Option<i32>,
}

impl Snapshot {
    pub fn capture<S>(state: &GameState<S>) -> Self {
        Self {
            player: PlayerView {
                rect: state.player.rect(),
                facing_right: state.player.facing_right,
            },
            coins: state.pool.active().map(|(_, c)| c.pos).collect(),
            coin_size: state.pool.spec().size,
            score: state.score,
            lives: state.lives,
        }
    }

    /// Score as shown on the HUD, zero-padded to three digits
    pub fn score_label(&self) -> String {
        format!("{:03}", self.score)
    }

    /// Number of life icons to draw
    pub fn life_icons(&self) -> usize {
        self.lives.map_or(0, |lives| lives.max(0) as usize)
    }
}

impl<S> GameState<S> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
