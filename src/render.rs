//! Stateless rendering of the game state.
//!
//! Drawing reads [`GameState`] and [`Params`] and mutates neither.

use macroquad::prelude::*;

use crate::game::console::Console;
use crate::game::geometry;
use crate::game::params::Params;
use crate::game::state::{GameState, Phase};

const CONSOLE_BG: Color = Color::new(0.0, 0.0, 0.0, 200.0 / 255.0);

/// Draws one frame of the current state.
pub fn draw(state: &GameState, params: &Params) {
    clear_background(WHITE);

    if state.phase == Phase::GameOver {
        draw_centered_text(
            "PRESS [ENTER] TO PLAY AGAIN",
            params.screen_height / 2.0 - 50.0,
            20.0,
            GRAY,
            params,
        );
    } else {
        if params.debug_overlay {
            draw_debug_hud(state, params);
        }

        let ground = geometry::ground_rect(params);
        draw_rectangle(ground.x, ground.y, ground.w, ground.h, GREEN);

        let player = &state.player;
        draw_rectangle(
            player.pos.x - player.size.x / 2.0,
            player.pos.y - player.size.y / 2.0,
            player.size.x,
            player.size.y,
            BLACK,
        );

        // one bar per remaining life
        for i in 0..player.life.max(0) {
            draw_rectangle(10.0 + 40.0 * i as f32, 10.0, 35.0, 10.0, LIGHTGRAY);
        }

        for item in &state.food {
            if item.visible {
                draw_circle(item.pos.x, item.pos.y, item.radius, RED);
            }
        }

        if state.phase == Phase::Paused {
            draw_centered_text(
                "GAME PAUSED",
                params.screen_height / 2.0 - 40.0,
                40.0,
                GRAY,
                params,
            );
        }
    }

    if state.console.shown {
        draw_console(state, params);
    }
}

fn draw_centered_text(text: &str, y: f32, font_size: f32, color: Color, params: &Params) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        params.screen_width / 2.0 - dims.width / 2.0,
        y,
        font_size,
        color,
    );
}

fn draw_console(state: &GameState, params: &Params) {
    let panel = Console::panel(params);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, CONSOLE_BG);

    let input_box = Console::input_box(params);
    draw_rectangle(input_box.x, input_box.y, input_box.w, input_box.h, LIGHTGRAY);

    draw_text(
        &state.console.input,
        input_box.x + 5.0,
        input_box.y + input_box.h - 8.0,
        20.0,
        BLACK,
    );
}

fn draw_debug_hud(state: &GameState, params: &Params) {
    let font_size = 20.0;
    draw_text(
        &format!(
            "screen: {}x{}",
            params.screen_width as i32, params.screen_height as i32
        ),
        50.0,
        70.0,
        font_size,
        BLACK,
    );
    draw_text(
        &format!("x: {}", state.player.pos.x),
        50.0,
        90.0,
        font_size,
        BLACK,
    );
    draw_text(
        &format!("console: {}", state.console.mouse_on_input),
        50.0,
        110.0,
        font_size,
        BLACK,
    );
}
