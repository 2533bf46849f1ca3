use macroquad::prelude::*;

use picnic::game::cooldown::Cooldown;
use picnic::game::input::InputSnapshot;
use picnic::game::params::Params;
use picnic::game::state::GameState;
use picnic::render;

fn window_conf() -> Conf {
    let params = Params::default();
    Conf {
        window_title: "Picnic".to_owned(),
        window_width: params.screen_width as i32,
        window_height: params.screen_height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let params = Params::default();
    let mut rng = ::rand::rng();

    let mut state = GameState::new(&params, &mut rng);
    // The reveal cooldown is the program's single timer; it survives
    // game-over restarts, so it lives here rather than in the state.
    let mut reveal = Cooldown::new(params.reveal_interval_secs);

    info!("placed {} food items on the ground", state.food.len());

    loop {
        let input = InputSnapshot::capture();
        state.update(&params, &input, get_time(), &mut reveal, &mut rng);
        render::draw(&state, &params);
        next_frame().await
    }
}
