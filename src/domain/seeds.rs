use rand::Rng;

use super::{CellState, VoxelGrid};
use crate::config::ConfigError;

/// Initial contents of the grid, placed into the committed buffer
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// Nothing alive
    Empty,
    /// A solid cube of `edge` cells per side, centered in the interior
    CenteredCube { edge: usize, state: u8 },
    /// Every interior cell alive with probability `density`
    Random { density: f64, state: u8 },
    /// Explicit (x, y, z, state) list in interior coordinates
    Cells(Vec<(usize, usize, usize, u8)>),
}

impl Seed {
    /// 3x3x3 cube at maximum age, the default starting point
    pub const fn reference() -> Self {
        Seed::CenteredCube { edge: 3, state: 4 }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Seed::Empty => "Empty",
            Seed::CenteredCube { .. } => "Cube",
            Seed::Random { .. } => "Random",
            Seed::Cells(_) => "Custom",
        }
    }

    /// Check the seed fits a grid with `grid_edge` interior cells per axis
    pub fn validate(&self, grid_edge: usize) -> Result<(), ConfigError> {
        match self {
            Seed::Empty => Ok(()),
            Seed::CenteredCube { edge, state } => {
                check_state(*state)?;
                cube_span(*edge, grid_edge).map(|_| ())
            }
            Seed::Random { density, state } => {
                check_state(*state)?;
                if (0.0..=1.0).contains(density) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidDensity(*density))
                }
            }
            Seed::Cells(cells) => cells.iter().try_for_each(|&(x, y, z, state)| {
                check_state(state)?;
                let inside = |v: usize| (1..=grid_edge).contains(&v);
                if inside(x) && inside(y) && inside(z) {
                    Ok(())
                } else {
                    Err(ConfigError::SeedOutOfBounds { x, y, z, edge: grid_edge })
                }
            }),
        }
    }

    /// Place the seed using the thread-local RNG for random seeds.
    /// Returns the number of cells set alive.
    pub fn place(&self, grid: &mut VoxelGrid) -> Result<usize, ConfigError> {
        self.place_with(grid, &mut rand::rng())
    }

    /// Place the seed drawing randomness from `rng`
    pub fn place_with(&self, grid: &mut VoxelGrid, rng: &mut impl Rng) -> Result<usize, ConfigError> {
        self.validate(grid.edge())?;

        let cells: Vec<(usize, usize, usize, u8)> = match self {
            Seed::Empty => Vec::new(),
            Seed::CenteredCube { edge, state } => {
                let span = cube_span(*edge, grid.edge())?;
                let (lo, hi) = (*span.start(), *span.end());
                (lo..=hi)
                    .flat_map(|z| (lo..=hi).flat_map(move |y| (lo..=hi).map(move |x| (x, y, z))))
                    .map(|(x, y, z)| (x, y, z, *state))
                    .collect()
            }
            Seed::Random { density, state } => grid
                .interior()
                .filter(|_| rng.random_bool(*density))
                .map(|(x, y, z)| (x, y, z, *state))
                .collect(),
            Seed::Cells(cells) => cells.clone(),
        };

        for &(x, y, z, state) in &cells {
            grid.set_current(x, y, z, CellState::new(state));
        }
        Ok(cells.iter().filter(|cell| cell.3 > 0).count())
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::reference()
    }
}

fn check_state(state: u8) -> Result<(), ConfigError> {
    CellState::try_new(state)
        .map(|_| ())
        .ok_or(ConfigError::InvalidState(state))
}

/// Interior coordinates covered by a centered cube. A 3-cube in a 50-grid spans 24..=26.
fn cube_span(cube: usize, grid_edge: usize) -> Result<std::ops::RangeInclusive<usize>, ConfigError> {
    let start = (grid_edge / 2).saturating_sub(cube / 2).max(1);
    let end = start + cube.saturating_sub(1);
    if cube == 0 || end > grid_edge {
        return Err(ConfigError::SeedTooLarge { seed_edge: cube, grid_edge });
    }
    Ok(start..=end)
}

/// Named seeds for the UI
pub mod presets {
    use super::*;

    pub fn all_seeds() -> Vec<Seed> {
        vec![
            Seed::reference(),
            Seed::CenteredCube { edge: 1, state: 4 },
            Seed::Random { density: 0.05, state: 4 },
            Seed::Empty,
        ]
    }
}
