use log::{info, warn};

use crate::application::Simulation;
use crate::config::{ConfigError, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL, SimulationConfig};
use crate::domain::rules::presets;
use crate::domain::seeds;

/// Chance that a face-touching count combination is a birth in a random rule
const RANDOM_RULE_DENSITY: f64 = 0.1;

/// GameState drives the simulation from the frame clock.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub simulation: Simulation,
    pub is_running: bool,
    /// Frame time accumulated since the last tick
    pub update_timer: f32,
    /// Seconds between ticks while running
    pub tick_interval: f32,
    /// Position in `presets::all_rules()` of the active rule
    pub rule_index: usize,
    /// Position in `seeds::presets::all_seeds()` of the active seed
    pub seed_index: usize,
    pub last_tick_time_ms: f32,   // Tick performance metric
    pub last_render_time_ms: f32, // Render performance metric
}

impl GameState {
    /// Build the simulation from `config`, paused
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            simulation: Simulation::new(config)?,
            is_running: false,
            update_timer: 0.0,
            tick_interval: config.tick_interval,
            rule_index: 0,
            seed_index: 0,
            last_tick_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!("Simulation {}", if self.is_running { "running" } else { "paused" });
        self
    }

    /// Reseed and pause
    pub fn reset(mut self) -> Self {
        self.simulation.reset();
        self.update_timer = 0.0;
        self.is_running = false;
        self
    }

    /// Run a single tick now, whether or not the clock is running
    pub fn step_once(mut self) -> Self {
        self.run_tick();
        self.update_timer = 0.0;
        self
    }

    /// Lengthen or shorten the tick interval
    pub fn adjust_interval(mut self, delta: f32) -> Self {
        self.tick_interval = (self.tick_interval + delta).clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL);
        self
    }

    /// Move to the next built-in rule
    pub fn cycle_rule(mut self) -> Self {
        let mut rules = presets::all_rules();
        self.rule_index = (self.rule_index + 1) % rules.len();
        self.simulation.set_rule(rules.swap_remove(self.rule_index));
        self
    }

    /// Install a freshly generated random birth table
    pub fn randomize_rule(mut self) -> Self {
        match presets::random(&mut rand::rng(), RANDOM_RULE_DENSITY) {
            Ok(rule) => self.simulation.set_rule(Box::new(rule)),
            Err(err) => warn!("Random rule rejected: {}", err),
        }
        self
    }

    /// Move to the next built-in seed and restart from it, paused
    pub fn cycle_seed(mut self) -> Self {
        let mut all = seeds::presets::all_seeds();
        let next = (self.seed_index + 1) % all.len();
        let seed = all.swap_remove(next);
        let name = seed.name();
        match self.simulation.set_seed(seed) {
            Ok(()) => self.seed_index = next,
            Err(err) => warn!("Seed {} rejected: {}", name, err),
        }
        self.update_timer = 0.0;
        self.is_running = false;
        self
    }

    /// Switch between serial and parallel ticking
    pub fn toggle_algorithm(mut self) -> Self {
        let next = self.simulation.algorithm().toggled();
        self.simulation.set_algorithm(next);
        self
    }

    /// Advance the clock by one frame.
    /// At most one tick runs per call, once `tick_interval` has accumulated.
    pub fn update(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.tick_interval {
            self.run_tick();
            self.update_timer = 0.0;
        }

        self
    }

    fn run_tick(&mut self) {
        let start = std::time::Instant::now();
        self.simulation.tick();
        self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&SimulationConfig::default().with_grid_size(12)).unwrap()
    }

    #[test]
    fn test_paused_state_never_ticks() {
        let state = state().update(10.0);
        assert_eq!(state.simulation.generation(), 0);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let state = state().with_running(true).update(0.4).update(0.4);
        assert_eq!(state.simulation.generation(), 0);

        let state = state.update(0.4);
        assert_eq!(state.simulation.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_long_frame_runs_one_tick() {
        let state = state().with_running(true).update(5.0);
        assert_eq!(state.simulation.generation(), 1);
    }

    #[test]
    fn test_step_once_while_paused() {
        let state = state().step_once();
        assert!(!state.is_running);
        assert_eq!(state.simulation.generation(), 1);
    }

    #[test]
    fn test_reset_pauses_and_reseeds() {
        let state = state().with_running(true).update(1.0).update(1.0).reset();
        assert!(!state.is_running);
        assert_eq!(state.simulation.generation(), 0);
        assert_eq!(state.simulation.population(), 27);
    }

    #[test]
    fn test_adjust_interval_is_clamped() {
        let state = state().adjust_interval(-10.0);
        assert_eq!(state.tick_interval, MIN_TICK_INTERVAL);
        let state = state.adjust_interval(100.0);
        assert_eq!(state.tick_interval, MAX_TICK_INTERVAL);
    }

    #[test]
    fn test_cycle_rule_wraps_around() {
        let count = presets::all_rules().len();
        let mut state = state();
        for _ in 0..count {
            state = state.cycle_rule();
        }
        assert_eq!(state.rule_index, 0);
        assert_eq!(state.simulation.rule().name(), "4/4/5/M");

        let state = state.cycle_rule();
        assert_eq!(state.rule_index, 1);
        assert_eq!(state.simulation.rule().name(), "Bloom");
    }

    #[test]
    fn test_randomize_rule_installs_random_table() {
        let state = state().randomize_rule();
        assert_eq!(state.simulation.rule().name(), "Random");
        assert!(!state.simulation.rule().births_without_face_contact());
    }

    #[test]
    fn test_cycle_seed_reseeds() {
        let state = state().step_once().cycle_seed();
        assert_eq!(state.seed_index, 1);
        assert_eq!(state.simulation.generation(), 0);
        assert_eq!(state.simulation.population(), 1);
    }

    #[test]
    fn test_toggle_running() {
        let state = state().toggle_running();
        assert!(state.is_running);
        assert!(!state.toggle_running().is_running);
    }
}
