//! Per-tick input snapshot.
//!
//! All keyboard and mouse polling happens here, once per frame. Update logic
//! only ever sees the snapshot, which keeps it a function of state + input.

use macroquad::prelude::*;

/// Input state captured at the top of a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Left arrow held down.
    pub left_held: bool,
    /// Right arrow held down.
    pub right_held: bool,
    /// Pause toggle pressed this frame.
    pub pause_pressed: bool,
    /// Confirm (restart) pressed this frame.
    pub confirm_pressed: bool,
    /// Console toggle pressed this frame.
    pub console_toggle_pressed: bool,
    /// Backspace pressed this frame.
    pub backspace_pressed: bool,
    /// Character typed this frame, if any.
    pub typed: Option<char>,
    /// Mouse position in screen coordinates.
    pub mouse_pos: Vec2,
}

impl InputSnapshot {
    /// Reads the current macroquad input state.
    pub fn capture() -> Self {
        let (mouse_x, mouse_y) = mouse_position();
        Self {
            left_held: is_key_down(KeyCode::Left),
            right_held: is_key_down(KeyCode::Right),
            pause_pressed: is_key_pressed(KeyCode::P),
            confirm_pressed: is_key_pressed(KeyCode::Enter),
            console_toggle_pressed: is_key_pressed(KeyCode::C),
            backspace_pressed: is_key_pressed(KeyCode::Backspace),
            typed: get_char_pressed(),
            mouse_pos: vec2(mouse_x, mouse_y),
        }
    }
}
