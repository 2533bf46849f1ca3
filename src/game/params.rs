//! Tunable game parameters.

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

/// Default window width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;
/// Default window height in pixels.
pub const SCREEN_HEIGHT: f32 = 450.0;
/// Lives the player starts a session with.
pub const PLAYER_MAX_LIFE: i32 = 5;
/// Food items generated per session.
pub const FOOD_AMOUNT: usize = 50;
/// Seconds between successive food reveals.
pub const REVEAL_INTERVAL_SECS: u64 = 2;

/// Axis the spawn list is ordered by after generation.
///
/// The ordering rule is a tuning decision, so it lives in [`Params`] rather
/// than being hardcoded into generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnAxis {
    /// Order items left to right.
    #[default]
    X,
    /// Order items top to bottom.
    Y,
}

impl SpawnAxis {
    /// Sort key of a position along this axis.
    pub fn component(self, pos: Vec2) -> f32 {
        match self {
            SpawnAxis::X => pos.x,
            SpawnAxis::Y => pos.y,
        }
    }
}

/// Game parameters that control a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Window width in pixels.
    pub screen_width: f32,
    /// Window height in pixels.
    pub screen_height: f32,
    /// Lives the player starts with.
    pub max_life: i32,
    /// Food items generated per session.
    pub food_amount: usize,
    /// Smallest food radius in pixels.
    pub min_food_radius: f32,
    /// Largest food radius in pixels.
    pub max_food_radius: f32,
    /// Smallest reward value a food item can carry.
    pub min_food_value: i32,
    /// Largest reward value a food item can carry.
    pub max_food_value: i32,
    /// Whole seconds that must elapse between food reveals.
    pub reveal_interval_secs: u64,
    /// Horizontal distance the player covers per tick of held input.
    pub player_speed: f32,
    /// Position draws attempted before falling back to an edge placement.
    pub placement_attempts: usize,
    /// Axis the spawn list is ordered by after generation.
    pub spawn_axis: SpawnAxis,
    /// Characters the console input buffer accepts.
    pub console_max_chars: usize,
    /// Draws the on-screen debug HUD when set.
    pub debug_overlay: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            max_life: PLAYER_MAX_LIFE,
            food_amount: FOOD_AMOUNT,
            min_food_radius: 10.0,
            max_food_radius: SCREEN_WIDTH / 60.0,
            min_food_value: 1,
            max_food_value: 15,
            reveal_interval_secs: REVEAL_INTERVAL_SECS,
            player_speed: 5.0,
            placement_attempts: 16,
            spawn_axis: SpawnAxis::default(),
            console_max_chars: 8,
            debug_overlay: false,
        }
    }
}

impl Params {
    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
