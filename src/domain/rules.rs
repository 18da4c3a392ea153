use rand::Rng;

use super::{CellState, NeighborCounts, STATE_COUNT};
use super::neighborhood::{CORNER_NEIGHBORS, EDGE_NEIGHBORS, FACE_NEIGHBORS};
use crate::config::ConfigError;

/// Trait for 3D cellular automaton rules.
/// The transition engine only talks to this, so rule sets can be swapped freely.
pub trait RuleSet: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    /// Short description
    fn description(&self) -> &str;

    /// Next state of an empty cell with these live-neighbor counts
    fn birth(&self, counts: NeighborCounts) -> CellState;

    /// Next state of a live cell. Neighbors play no part.
    fn decay(&self, current: CellState) -> CellState;

    /// Next state of any cell
    fn next_state(&self, current: CellState, counts: NeighborCounts) -> CellState {
        if current.is_alive() {
            self.decay(current)
        } else {
            self.birth(counts)
        }
    }

    /// Whether an empty cell with no live face neighbor can ever be born.
    /// When false the engine may skip edge and corner counting for such cells.
    fn births_without_face_contact(&self) -> bool;
}

const FACE_SLOTS: usize = FACE_NEIGHBORS + 1;
const EDGE_SLOTS: usize = EDGE_NEIGHBORS + 1;
const CORNER_SLOTS: usize = CORNER_NEIGHBORS + 1;
const TABLE_LEN: usize = STATE_COUNT * FACE_SLOTS * EDGE_SLOTS * CORNER_SLOTS;

/// Every (face, edge, corner) combination the table has a slot for
fn all_counts() -> impl Iterator<Item = NeighborCounts> {
    (0..=FACE_NEIGHBORS as u8).flat_map(|face| {
        (0..=EDGE_NEIGHBORS as u8).flat_map(move |edge| {
            (0..=CORNER_NEIGHBORS as u8).map(move |corner| NeighborCounts::new(face, edge, corner))
        })
    })
}

#[inline]
const fn slot(state: u8, counts: NeighborCounts) -> usize {
    ((state as usize * FACE_SLOTS + counts.face as usize) * EDGE_SLOTS + counts.edge as usize)
        * CORNER_SLOTS
        + counts.corner as usize
}

/// Lookup table indexed by (state, face, edge, corner), plus a per-state
/// countdown step for live cells.
///
/// Only the state-0 slice drives births. Live cells ignore their neighbors
/// and count down by their decay step every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    name: String,
    description: String,
    entries: Vec<CellState>,
    decay_steps: [u8; STATE_COUNT],
    face_free_births: bool,
}

impl RuleTable {
    pub fn builder(name: impl Into<String>) -> RuleTableBuilder {
        RuleTableBuilder::new(name)
    }

    /// Raw table entry
    pub fn entry(&self, state: CellState, counts: NeighborCounts) -> CellState {
        self.entries[slot(state.value(), counts)]
    }

    /// Countdown step applied to a live cell in `state`
    pub fn decay_step(&self, state: CellState) -> u8 {
        self.decay_steps[state.value() as usize]
    }

    /// Number of (face, edge, corner) combinations that give birth
    pub fn birth_count(&self) -> usize {
        all_counts()
            .filter(|&counts| self.entry(CellState::EMPTY, counts).is_alive())
            .count()
    }
}

impl RuleSet for RuleTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    fn birth(&self, counts: NeighborCounts) -> CellState {
        self.entries[slot(0, counts)]
    }

    #[inline]
    fn decay(&self, current: CellState) -> CellState {
        current.decay(self.decay_steps[current.value() as usize])
    }

    fn births_without_face_contact(&self) -> bool {
        self.face_free_births
    }
}

/// Builds a `RuleTable`, validating every entry.
/// The first invalid call is remembered and reported by `build`.
#[derive(Clone, Debug)]
pub struct RuleTableBuilder {
    name: String,
    description: String,
    entries: Vec<CellState>,
    decay_steps: [u8; STATE_COUNT],
    error: Option<ConfigError>,
}

impl RuleTableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut decay_steps = [1; STATE_COUNT];
        decay_steps[0] = 0;
        Self {
            name: name.into(),
            description: String::new(),
            entries: vec![CellState::EMPTY; TABLE_LEN],
            decay_steps,
            error: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// An empty cell with exactly these counts becomes `state`
    pub fn birth(mut self, face: u8, edge: u8, corner: u8, state: u8) -> Self {
        if self.error.is_some() {
            return self;
        }
        if face as usize > FACE_NEIGHBORS
            || edge as usize > EDGE_NEIGHBORS
            || corner as usize > CORNER_NEIGHBORS
        {
            self.error = Some(ConfigError::CountOutOfRange { face, edge, corner });
            return self;
        }
        match CellState::try_new(state) {
            Some(next) => self.entries[slot(0, NeighborCounts::new(face, edge, corner))] = next,
            None => self.error = Some(ConfigError::InvalidState(state)),
        }
        self
    }

    /// Every count combination matching `predicate` gives birth to `state`
    pub fn birth_when(mut self, predicate: impl Fn(NeighborCounts) -> bool, state: u8) -> Self {
        let Some(next) = CellState::try_new(state) else {
            self.error.get_or_insert(ConfigError::InvalidState(state));
            return self;
        };
        for counts in all_counts().filter(|&c| predicate(c)) {
            self.entries[slot(0, counts)] = next;
        }
        self
    }

    /// Countdown step for live cells in `state`. Must be at least 1.
    pub fn decay_step(mut self, state: u8, step: u8) -> Self {
        if state == 0 || state as usize >= STATE_COUNT || step == 0 {
            self.error.get_or_insert(ConfigError::InvalidDecayStep { state, step });
        } else {
            self.decay_steps[state as usize] = step;
        }
        self
    }

    pub fn build(self) -> Result<RuleTable, ConfigError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let face_free_births = all_counts()
            .filter(|c| c.face == 0)
            .any(|c| self.entries[slot(0, c)].is_alive());

        Ok(RuleTable {
            name: self.name,
            description: self.description,
            entries: self.entries,
            decay_steps: self.decay_steps,
            face_free_births,
        })
    }
}

/// Built-in rule sets
pub mod presets {
    use super::*;

    /// "4/4/5/M": an empty cell touching at least one live face and with
    /// exactly 4 live neighbors of any class is born at the maximum age.
    pub fn reference() -> RuleTable {
        birth_table(
            "4/4/5/M",
            "Born on 4 neighbors, 5 states, Moore",
            |c| c.face > 0 && c.total() == 4,
        )
    }

    /// Born when the total live neighbor count is any of `totals`
    pub fn birth_on_totals(
        name: impl Into<String>,
        totals: &[u8],
    ) -> Result<RuleTable, ConfigError> {
        if let Some(&bad) = totals.iter().find(|&&t| t as usize > 26) {
            return Err(ConfigError::CountOutOfRange {
                face: bad,
                edge: 0,
                corner: 0,
            });
        }
        let listed = totals
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",");
        RuleTable::builder(name)
            .description(format!("Born on totals {}", listed))
            .birth_when(|c| totals.contains(&c.total()), CellState::NEWBORN.value())
            .build()
    }

    /// Crystal growth: born only when touching exactly one face and nothing else
    pub fn face_growth() -> RuleTable {
        birth_table(
            "Crystal",
            "Born on a single face contact",
            |c| c.face == 1 && c.edge == 0 && c.corner == 0,
        )
    }

    /// Born on 2 or 3 neighbors, the denser sibling of the reference rule
    pub fn bloom() -> RuleTable {
        birth_table(
            "Bloom",
            "Born on 2-3 neighbors with face contact",
            |c| c.face > 0 && (2..=3).contains(&c.total()),
        )
    }

    /// Random birth table: each face-touching combination is a birth with
    /// probability `density`
    pub fn random(rng: &mut impl Rng, density: f64) -> Result<RuleTable, ConfigError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density));
        }
        let births: Vec<NeighborCounts> = all_counts()
            .filter(|c| c.face > 0)
            .filter(|_| rng.random_bool(density))
            .collect();
        RuleTable::builder("Random")
            .description(format!("{} random birth entries", births.len()))
            .birth_when(|c| births.contains(&c), CellState::NEWBORN.value())
            .build()
    }

    fn birth_table(
        name: &str,
        description: &str,
        predicate: impl Fn(NeighborCounts) -> bool,
    ) -> RuleTable {
        let mut entries = vec![CellState::EMPTY; TABLE_LEN];
        for counts in all_counts().filter(|&c| predicate(c)) {
            entries[slot(0, counts)] = CellState::NEWBORN;
        }
        let mut decay_steps = [1; STATE_COUNT];
        decay_steps[0] = 0;
        let face_free_births = all_counts()
            .filter(|c| c.face == 0)
            .any(|c| entries[slot(0, c)].is_alive());

        RuleTable {
            name: name.to_owned(),
            description: description.to_owned(),
            entries,
            decay_steps,
            face_free_births,
        }
    }

    /// All built-in rules, reference first
    pub fn all_rules() -> Vec<Box<dyn RuleSet>> {
        vec![
            Box::new(reference()) as Box<dyn RuleSet>,
            Box::new(bloom()),
            Box::new(face_growth()),
        ]
    }
}

/// Get default rule (4/4/5/M)
pub fn default_rule() -> Box<dyn RuleSet> {
    Box::new(presets::reference())
}
