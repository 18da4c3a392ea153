mod cell;
mod grid;
mod algorithm;
pub mod neighborhood;
pub mod rules;
pub mod engine;
pub mod seeds;

pub use cell::{CellState, MAX_STATE, STATE_COUNT};
pub use grid::VoxelGrid;
pub use neighborhood::{NeighborClass, NeighborCounts, Neighborhood};
pub use rules::{RuleSet, RuleTable, RuleTableBuilder, default_rule};
pub use seeds::Seed;
pub use algorithm::Algorithm;
