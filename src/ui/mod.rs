mod button;

pub use button::Button;

use macroquad::prelude::screen_width;

use crate::application::GameState;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Everything a button or key can ask the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    TogglePlay,
    Step,
    Reset,
    NextRule,
    RandomRule,
    NextSeed,
    ToggleAlgorithm,
    Faster,
    Slower,
}

impl UiAction {
    /// Apply to the game state
    pub fn apply(self, state: GameState) -> GameState {
        match self {
            UiAction::TogglePlay => state.toggle_running(),
            UiAction::Step => state.step_once(),
            UiAction::Reset => state.reset(),
            UiAction::NextRule => state.cycle_rule(),
            UiAction::RandomRule => state.randomize_rule(),
            UiAction::NextSeed => state.cycle_seed(),
            UiAction::ToggleAlgorithm => state.toggle_algorithm(),
            UiAction::Faster => state.adjust_interval(-0.1),
            UiAction::Slower => state.adjust_interval(0.1),
        }
    }
}

/// Panel buttons, top to bottom
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ("Play/Pause", UiAction::TogglePlay),
        ("Step", UiAction::Step),
        ("Reset", UiAction::Reset),
        ("Next Rule", UiAction::NextRule),
        ("Random Rule", UiAction::RandomRule),
        ("Next Seed", UiAction::NextSeed),
        ("Serial/Parallel", UiAction::ToggleAlgorithm),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
