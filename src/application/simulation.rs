use log::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::domain::{engine, default_rule, Algorithm, CellState, RuleSet, Seed, VoxelGrid};

/// Simulation owns one automaton: its grid, rule set and seed.
///
/// Constructing it is the only way to get a grid, so a tick can never run on
/// an unseeded or half-built lattice.
pub struct Simulation {
    grid: VoxelGrid,
    rule: Box<dyn RuleSet>,
    seed: Seed,
    algorithm: Algorithm,
    generation: u64,
}

impl Simulation {
    /// Allocate the grid, seed it and install the default 4/4/5/M rule
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rule(config, default_rule())
    }

    /// Same as `new` with a caller-supplied rule set
    pub fn with_rule(config: &SimulationConfig, rule: Box<dyn RuleSet>) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = VoxelGrid::new(config.grid_size);
        let placed = config.seed.place(&mut grid)?;
        info!(
            "Simulation {}^3, rule {}, seed {} ({} cells), {} ticks",
            config.grid_size,
            rule.name(),
            config.seed.name(),
            placed,
            config.algorithm.name()
        );

        Ok(Self {
            grid,
            rule,
            seed: config.seed.clone(),
            algorithm: config.algorithm,
            generation: 0,
        })
    }

    /// Run one full transition pass and commit it
    pub fn tick(&mut self) {
        engine::advance(&mut self.grid, self.rule.as_ref(), self.algorithm);
        self.generation += 1;
        debug!("Generation {}: {} live cells", self.generation, self.grid.population());
    }

    /// Committed state at (x, y, z). The boundary shell reads as empty.
    pub fn cell_state(&self, x: usize, y: usize, z: usize) -> CellState {
        self.grid.get(x, y, z)
    }

    /// Non-empty interior cells with their positions
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, usize, CellState)> + '_ {
        self.grid.live_cells()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Interior cells per axis
    pub fn edge(&self) -> usize {
        self.grid.edge()
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn rule(&self) -> &dyn RuleSet {
        self.rule.as_ref()
    }

    /// Swap the rule set. Takes effect from the next tick.
    pub fn set_rule(&mut self, rule: Box<dyn RuleSet>) {
        info!("Rule changed to {}", rule.name());
        self.rule = rule;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Replace the seed and restart from it
    pub fn set_seed(&mut self, seed: Seed) -> Result<(), ConfigError> {
        seed.validate(self.grid.edge())?;
        self.seed = seed;
        self.reset();
        Ok(())
    }

    /// Clear the grid and place the configured seed again
    pub fn reset(&mut self) {
        self.grid.clear();
        // The seed was validated against this grid at construction
        let placed = self.seed.place(&mut self.grid).unwrap_or(0);
        self.generation = 0;
        info!("Simulation reset, {} seed cells", placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::presets;

    #[test]
    fn test_new_places_reference_seed() {
        let sim = Simulation::new(&SimulationConfig::default()).unwrap();
        assert_eq!(sim.edge(), 50);
        assert_eq!(sim.population(), 27);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.cell_state(25, 25, 25), CellState::new(4));
        assert_eq!(sim.cell_state(0, 25, 25), CellState::EMPTY);
        assert_eq!(sim.rule().name(), "4/4/5/M");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimulationConfig::default().with_grid_size(0);
        assert!(matches!(Simulation::new(&config), Err(ConfigError::ZeroGridSize)));
    }

    #[test]
    fn test_tick_advances_generation() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        sim.tick();
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.cell_state(25, 25, 25), CellState::new(3));
        assert_eq!(sim.cell_state(23, 24, 24), CellState::new(4));
    }

    #[test]
    fn test_serial_and_parallel_simulations_agree() {
        let base = SimulationConfig::default().with_grid_size(20);
        let mut serial = Simulation::new(&base.clone().with_algorithm(Algorithm::Serial)).unwrap();
        let mut parallel = Simulation::new(&base.with_algorithm(Algorithm::Parallel)).unwrap();
        for _ in 0..12 {
            serial.tick();
            parallel.tick();
        }
        assert_eq!(serial.grid().cells(), parallel.grid().cells());
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut sim = Simulation::new(&SimulationConfig::default()).unwrap();
        for _ in 0..5 {
            sim.tick();
        }
        sim.reset();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 27);
        assert_eq!(sim.cell_state(24, 24, 24), CellState::new(4));
    }

    #[test]
    fn test_set_seed_validates_and_reseeds() {
        let mut sim = Simulation::new(&SimulationConfig::default().with_grid_size(10)).unwrap();
        sim.tick();

        sim.set_seed(Seed::CenteredCube { edge: 1, state: 4 }).unwrap();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 1);
        assert_eq!(sim.cell_state(5, 5, 5), CellState::new(4));

        let err = sim.set_seed(Seed::CenteredCube { edge: 11, state: 4 });
        assert_eq!(err, Err(ConfigError::SeedTooLarge { seed_edge: 11, grid_edge: 10 }));
        assert_eq!(sim.seed(), &Seed::CenteredCube { edge: 1, state: 4 });
    }

    #[test]
    fn test_live_cells_reports_only_non_empty() {
        let config = SimulationConfig::default()
            .with_grid_size(5)
            .with_seed(Seed::Cells(vec![(1, 1, 1, 2), (5, 5, 5, 4)]));
        let sim = Simulation::with_rule(&config, Box::new(presets::face_growth())).unwrap();
        let live: Vec<_> = sim.live_cells().collect();
        assert_eq!(live, vec![(1, 1, 1, CellState::new(2)), (5, 5, 5, CellState::new(4))]);
    }

    #[test]
    fn test_set_rule_changes_behavior() {
        let config = SimulationConfig::default()
            .with_grid_size(5)
            .with_seed(Seed::Cells(vec![(3, 3, 3, 4)]));
        let mut sim = Simulation::new(&config).unwrap();
        sim.set_rule(Box::new(presets::face_growth()));
        sim.tick();
        // Every face neighbor touches exactly one live face
        assert_eq!(sim.cell_state(2, 3, 3), CellState::new(4));
        assert_eq!(sim.population(), 7);
    }
}
