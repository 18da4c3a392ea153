mod camera;
mod game_state;
mod simulation;

pub use camera::{FlyCamera, Movement, RUN_SPEED, WALK_SPEED};
pub use game_state::GameState;
pub use simulation::Simulation;
