//! Simulation configuration and the errors raised when validating it.

use thiserror::Error;

use crate::domain::{Algorithm, Seed};

/// Default interior cells per axis
pub const DEFAULT_GRID_SIZE: usize = 50;

/// Default seconds of accumulated frame time between ticks
pub const DEFAULT_TICK_INTERVAL: f32 = 1.0;

/// Bounds for the user-adjustable tick interval
pub const MIN_TICK_INTERVAL: f32 = 0.05;
pub const MAX_TICK_INTERVAL: f32 = 5.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,
    #[error("seed cube of edge {seed_edge} does not fit a grid of edge {grid_edge}")]
    SeedTooLarge { seed_edge: usize, grid_edge: usize },
    #[error("seed cell ({x}, {y}, {z}) lies outside interior 1..={edge}")]
    SeedOutOfBounds { x: usize, y: usize, z: usize, edge: usize },
    #[error("cell state {0} is out of range 0..=4")]
    InvalidState(u8),
    #[error("neighbor counts ({face}, {edge}, {corner}) exceed 6 faces, 12 edges, 8 corners")]
    CountOutOfRange { face: u8, edge: u8, corner: u8 },
    #[error("decay step {step} for state {state} is invalid")]
    InvalidDecayStep { state: u8, step: u8 },
    #[error("density {0} is outside 0..=1")]
    InvalidDensity(f64),
    #[error("tick interval {0}s is outside 0.05..=5 seconds")]
    InvalidTickInterval(f32),
}

/// Construction-time settings for a `Simulation`
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Interior cells per axis
    pub grid_size: usize,
    /// Initial grid contents
    pub seed: Seed,
    /// How each tick is scheduled
    pub algorithm: Algorithm,
    /// Seconds between ticks while running
    pub tick_interval: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: Seed::reference(),
            algorithm: Algorithm::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_tick_interval(mut self, seconds: f32) -> Self {
        self.tick_interval = seconds;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if !(MIN_TICK_INTERVAL..=MAX_TICK_INTERVAL).contains(&self.tick_interval) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval));
        }
        self.seed.validate(self.grid_size)
    }
}
