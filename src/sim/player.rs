//! The gopher: moves left and right along the ground

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge
    pub x: f32,
    /// Top edge, fixed at ground level
    pub y: f32,
    pub facing_right: bool,
    pub size: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Right edge of the playfield
    pub bound: f32,
}

impl Player {
    /// Gopher standing on the ground at the middle of the screen
    pub fn new(tuning: &Tuning) -> Self {
        let mut player = Self {
            x: 0.0,
            y: tuning.ground_y() - tuning.player_height,
            facing_right: false,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            speed: tuning.player_speed,
            bound: tuning.screen_width,
        };
        player.recenter();
        player
    }

    /// Back to `screen_width / 2`
    pub fn recenter(&mut self) {
        self.x = self.bound / 2.0;
        self.clamp();
    }

    /// Integrate one tick of horizontal movement
    ///
    /// Holding both directions cancels out; facing ends up right because
    /// right is applied last.
    pub fn move_by(&mut self, dt: f32, left: bool, right: bool) {
        let mut dir = 0.0;
        if left {
            dir -= 1.0;
            self.facing_right = false;
        }
        if right {
            dir += 1.0;
            self.facing_right = true;
        }

        self.x += dir * self.speed * dt;
        self.clamp();
    }

    /// Largest legal x
    #[inline]
    pub fn max_x(&self) -> f32 {
        (self.bound - self.size.x).max(0.0)
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, self.max_x());
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.x, self.size.y)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.size.x / 2.0
    }
}
