//! The player bar and its movement rules.

use macroquad::math::{Rect, Vec2, vec2};

use super::input::InputSnapshot;
use super::params::Params;

/// The player-controlled bar resting on the ground strip.
#[derive(Debug, Clone)]
pub struct Player {
    /// Center position.
    pub pos: Vec2,
    /// Width and height of the bar.
    pub size: Vec2,
    /// Remaining lives. The session ends when this reaches zero.
    pub life: i32,
}

impl Player {
    /// Creates the player at its starting position above the ground strip.
    pub fn new(params: &Params) -> Self {
        Self {
            pos: vec2(
                params.screen_width / 2.0,
                params.screen_height - params.screen_height / 8.0,
            ),
            size: vec2(params.screen_width / 10.0, params.screen_height / 22.5),
            life: params.max_life,
        }
    }

    /// Moves the bar horizontally for one tick of held input and clamps it
    /// so it never leaves the screen.
    pub fn apply_input(&mut self, params: &Params, input: &InputSnapshot) {
        if input.left_held {
            self.pos.x -= params.player_speed;
        }
        if input.right_held {
            self.pos.x += params.player_speed;
        }
        let half_width = self.size.x / 2.0;
        self.pos.x = self.pos.x.clamp(half_width, params.screen_width - half_width);
    }

    /// The bar's bounding rectangle, centered on `pos`.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - self.size.x / 2.0,
            self.pos.y - self.size.y / 2.0,
            self.size.x,
            self.size.y,
        )
    }
}
