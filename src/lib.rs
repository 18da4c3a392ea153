// Domain layer - the automaton core, no windowing
pub mod domain;

// Construction-time settings and their errors
pub mod config;

// Application layer - simulation ownership and clock
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, CellState, RuleSet, RuleTable, Seed, VoxelGrid};
pub use config::{ConfigError, SimulationConfig};
pub use application::{FlyCamera, GameState, Simulation};
