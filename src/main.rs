use log::error;
use macroquad::prelude::*;
use cellular_automata_3d::{
    FlyCamera, GameState, SimulationConfig,
    input::{self, MouseLook},
    rendering::{self, BACKGROUND_COLOR},
    ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("Invalid simulation config: {}", err);
            std::process::exit(1);
        }
    };
    let mut camera = FlyCamera::new();
    let mut look = MouseLook::default();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let mouse_pos = mouse_position();
        let delta_time = get_frame_time();

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera, delta_time);
        input::handle_zoom(&mut camera);
        look.update(&mut camera, mouse_pos);

        // Update simulation clock
        state = state.update(delta_time);

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BACKGROUND_COLOR);
        rendering::draw_scene(&state, &camera);
        rendering::draw_controls(&state, &camera, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
