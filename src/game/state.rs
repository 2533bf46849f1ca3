//! Session state and the per-tick update step.

use rand::Rng;

use super::console::Console;
use super::cooldown::Cooldown;
use super::food::Food;
use super::input::InputSnapshot;
use super::params::Params;
use super::player::Player;

/// Phase of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal gameplay; the update step runs.
    Playing,
    /// Gameplay frozen until pause is pressed again.
    Paused,
    /// Lives are exhausted; waiting for confirm to restart.
    GameOver,
}

/// All mutable session state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The player bar.
    pub player: Player,
    /// The spawn list, ordered by `params.spawn_axis`.
    pub food: Vec<Food>,
    /// Current phase of the state machine.
    pub phase: Phase,
    /// Developer console overlay.
    pub console: Console,
}

impl GameState {
    /// Builds a fresh session: full life and a newly placed, ordered spawn
    /// list with every item hidden.
    pub fn new(params: &Params, rng: &mut impl Rng) -> Self {
        let player = Player::new(params);
        let player_rect = player.rect();

        let mut food = Vec::with_capacity(params.food_amount);
        for _ in 0..params.food_amount {
            food.push(Food::place(params, &player_rect, rng));
        }

        let axis = params.spawn_axis;
        food.sort_by(|a, b| axis.component(a.pos).total_cmp(&axis.component(b.pos)));

        Self {
            player,
            food,
            phase: Phase::Playing,
            console: Console::default(),
        }
    }

    /// Advances the session by one tick.
    ///
    /// `now` is the clock reading in seconds. `reveal` is the program's one
    /// reveal cooldown; it outlives restarts, so the caller owns it rather
    /// than this struct.
    pub fn update(
        &mut self,
        params: &Params,
        input: &InputSnapshot,
        now: f64,
        reveal: &mut Cooldown,
        rng: &mut impl Rng,
    ) {
        if input.console_toggle_pressed {
            self.console.shown = !self.console.shown;
        }

        if self.phase == Phase::GameOver {
            // Restart is wholesale: everything, console included, starts over.
            if input.confirm_pressed {
                *self = Self::new(params, rng);
            }
            return;
        }

        if input.pause_pressed {
            self.phase = match self.phase {
                Phase::Playing => Phase::Paused,
                _ => Phase::Playing,
            };
        }

        if self.phase == Phase::Playing {
            self.player.apply_input(params, input);
            self.reveal_food(now, reveal, rng);
            if self.player.life <= 0 {
                self.phase = Phase::GameOver;
            }
        }
    }

    /// Picks one random slot per tick and reveals it if the cooldown fires.
    ///
    /// Revealing is driven purely by the shared cooldown; nothing ever hides
    /// an item again.
    fn reveal_food(&mut self, now: f64, reveal: &mut Cooldown, rng: &mut impl Rng) {
        if self.food.is_empty() {
            return;
        }
        let slot = rng.random_range(0..self.food.len());
        if reveal.poll(now) {
            self.food[slot].visible = true;
        }
    }

    /// Index of the food item the player is currently eating, if any.
    ///
    /// Not implemented: the consumption rule is still undecided, so this
    /// always returns `None` and nothing decrements [`Player::life`].
    // TODO: settle the consumption rule, then match visible items against
    // the player rectangle here.
    pub fn consumed_food(&self) -> Option<usize> {
        None
    }
}
