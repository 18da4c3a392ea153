use macroquad::prelude::*;

use crate::application::{FlyCamera, GameState, Movement, RUN_SPEED, WALK_SPEED};
use crate::ui::{Button, UiAction, panel_x};

/// Key bindings for simulation control
const KEY_ACTIONS: [(KeyCode, UiAction); 10] = [
    (KeyCode::Enter, UiAction::TogglePlay),
    (KeyCode::Space, UiAction::TogglePlay),
    (KeyCode::N, UiAction::Step),
    (KeyCode::R, UiAction::Reset),
    (KeyCode::Tab, UiAction::NextRule),
    (KeyCode::X, UiAction::RandomRule),
    (KeyCode::T, UiAction::NextSeed),
    (KeyCode::P, UiAction::ToggleAlgorithm),
    (KeyCode::Up, UiAction::Faster),
    (KeyCode::Down, UiAction::Slower),
];

const MOVE_KEYS: [(KeyCode, Movement); 6] = [
    (KeyCode::W, Movement::Forward),
    (KeyCode::S, Movement::Backward),
    (KeyCode::A, Movement::Left),
    (KeyCode::D, Movement::Right),
    (KeyCode::E, Movement::Up),
    (KeyCode::Q, Movement::Down),
];

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut FlyCamera, delta_time: f32) -> GameState {
    let new_state = KEY_ACTIONS.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action.apply(s) } else { s }
    });

    camera.movement_speed = if is_key_down(KeyCode::LeftShift) { RUN_SPEED } else { WALK_SPEED };
    MOVE_KEYS
        .iter()
        .filter(|(key, _)| is_key_down(*key))
        .for_each(|(_, direction)| camera.travel(*direction, delta_time));

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| btn.action.apply(s))
}

/// Zoom with mouse wheel, one degree of FOV per notch
pub fn handle_zoom(camera: &mut FlyCamera) {
    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        camera.zoom(wheel.signum());
    }
}

/// Mouse-look while the right button is held over the scene
#[derive(Default)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    /// Feed one frame of mouse state. Screen y grows downward, so it is flipped.
    pub fn track(&mut self, camera: &mut FlyCamera, mouse_pos: (f32, f32), held: bool) {
        if !held {
            self.last = None;
            return;
        }
        if let Some((lx, ly)) = self.last {
            camera.look(mouse_pos.0 - lx, ly - mouse_pos.1);
        }
        self.last = Some(mouse_pos);
    }

    pub fn update(&mut self, camera: &mut FlyCamera, mouse_pos: (f32, f32)) {
        let held = is_mouse_button_down(MouseButton::Right) && mouse_pos.0 < panel_x();
        self.track(camera, mouse_pos, held);
    }
}
