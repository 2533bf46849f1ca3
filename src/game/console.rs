//! Developer console overlay.
//!
//! The console can be toggled and drawn in any phase. Text entry targets the
//! input box at the bottom of the panel but is not driven by the frame loop
//! yet; [`Console::update`] is the entry point once it is.

use macroquad::math::Rect;

use super::input::InputSnapshot;
use super::params::Params;

// Character codes the input box accepts, space through '}'.
const PRINTABLE: std::ops::RangeInclusive<u32> = 32..=125;

/// Developer console state.
#[derive(Debug, Clone, Default)]
pub struct Console {
    /// Whether the overlay is drawn.
    pub shown: bool,
    /// Buffered input text.
    pub input: String,
    /// Whether the mouse hovers the input box.
    pub mouse_on_input: bool,
    /// Consecutive frames the mouse has spent over the input box.
    pub hover_frames: u32,
}

impl Console {
    /// The input box rectangle at the bottom of the console panel.
    pub fn input_box(params: &Params) -> Rect {
        Rect::new(
            params.screen_width / 40.0,
            params.screen_height - params.screen_height / 20.0 - params.screen_height / 40.0,
            params.screen_width - params.screen_width / 20.0,
            params.screen_height / 20.0,
        )
    }

    /// The translucent panel covering the lower third of the screen.
    pub fn panel(params: &Params) -> Rect {
        Rect::new(
            0.0,
            2.0 * params.screen_height / 3.0,
            params.screen_width,
            params.screen_height / 3.0,
        )
    }

    /// Advances text entry for one tick of input.
    ///
    /// Characters are accepted only while the mouse hovers the input box and
    /// the buffer holds fewer than `params.console_max_chars` characters; the
    /// length check runs before the write. Backspace on an empty buffer is a
    /// no-op.
    pub fn update(&mut self, params: &Params, input: &InputSnapshot) {
        self.mouse_on_input = Self::input_box(params).contains(input.mouse_pos);

        if self.mouse_on_input {
            if let Some(ch) = input.typed {
                if PRINTABLE.contains(&(ch as u32)) && self.input.len() < params.console_max_chars {
                    self.input.push(ch);
                }
            }
            if input.backspace_pressed {
                self.input.pop();
            }
            self.hover_frames += 1;
        } else {
            self.hover_frames = 0;
        }
    }
}
