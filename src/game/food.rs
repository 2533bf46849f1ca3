//! Food items and their placement on the ground strip.

use macroquad::math::{Rect, Vec2, vec2};
use rand::Rng;

use super::geometry;
use super::params::Params;

/// A food item resting on the ground strip.
///
/// Items start hidden and are revealed one at a time by the reveal cooldown.
/// `value` is the reward for eating the item; eating is not wired up yet, so
/// nothing reads it.
#[derive(Debug, Clone)]
pub struct Food {
    /// Center position.
    pub pos: Vec2,
    /// Circle radius.
    pub radius: f32,
    /// Whether the item is drawn.
    pub visible: bool,
    /// Reward granted when the item is eaten.
    pub value: i32,
}

impl Food {
    /// Places one hidden food item on the ground, avoiding the player.
    ///
    /// The radius is drawn from the configured range and the circle sits on
    /// the ground line. Horizontal draws that overlap `player_rect` are
    /// redrawn, up to `params.placement_attempts` times; after that the item
    /// falls back to the screen edge farther from the player, so placement
    /// always terminates.
    pub fn place(params: &Params, player_rect: &Rect, rng: &mut impl Rng) -> Self {
        let radius = rng.random_range(params.min_food_radius..=params.max_food_radius);
        let y = geometry::ground_rect(params).y - radius;

        let mut x = None;
        for _ in 0..params.placement_attempts {
            let candidate = rng.random_range(radius..=params.screen_width - radius);
            if !geometry::circle_overlaps_rect(vec2(candidate, y), radius, player_rect) {
                x = Some(candidate);
                break;
            }
        }
        let x = x.unwrap_or_else(|| {
            let player_center = player_rect.x + player_rect.w / 2.0;
            if player_center > params.screen_width / 2.0 {
                radius
            } else {
                params.screen_width - radius
            }
        });

        Self {
            pos: vec2(x, y),
            radius,
            visible: false,
            value: rng.random_range(params.min_food_value..=params.max_food_value),
        }
    }
}
