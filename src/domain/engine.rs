//! Transition engine: one synchronous tick over the whole grid.
//!
//! Every next state is computed from the committed buffer and written to the
//! pending buffer, then the two are exchanged. No cell ever sees a value
//! written during the same tick, so iteration order does not matter.

use rayon::prelude::*;

use super::{Algorithm, CellState, Neighborhood, RuleSet, VoxelGrid};

/// Next state of the cell at linear `index` of the committed buffer
#[inline]
fn transition(
    current: &[CellState],
    index: usize,
    hood: &Neighborhood,
    rule: &dyn RuleSet,
    classify_all: bool,
) -> CellState {
    let state = current[index];
    if state.is_alive() {
        return rule.decay(state);
    }
    let counts = hood.count(current, index, classify_all);
    if counts.face == 0 && !classify_all {
        return CellState::EMPTY;
    }
    rule.birth(counts)
}

/// Advance one tick on the current thread
pub fn step(grid: &mut VoxelGrid, rule: &dyn RuleSet) {
    let edge = grid.edge();
    let dim = grid.dim();
    let hood = Neighborhood::for_dim(dim);
    let classify_all = rule.births_without_face_contact();

    let (current, next) = grid.buffers_mut();
    for z in 1..=edge {
        for y in 1..=edge {
            let row = (z * dim + y) * dim;
            for x in 1..=edge {
                next[row + x] = transition(current, row + x, &hood, rule, classify_all);
            }
        }
    }

    grid.commit();
}

/// Advance one tick with the interior split into z-slabs across rayon workers.
/// The commit runs only after every slab has been written.
pub fn step_parallel(grid: &mut VoxelGrid, rule: &dyn RuleSet) {
    let edge = grid.edge();
    let dim = grid.dim();
    let slab = dim * dim;
    let hood = Neighborhood::for_dim(dim);
    let classify_all = rule.births_without_face_contact();

    let (current, next) = grid.buffers_mut();
    next.par_chunks_mut(slab)
        .enumerate()
        .skip(1)
        .take(edge)
        .for_each(|(z, out)| {
            for y in 1..=edge {
                for x in 1..=edge {
                    let local = y * dim + x;
                    out[local] = transition(current, z * slab + local, &hood, rule, classify_all);
                }
            }
        });

    grid.commit();
}

/// Dispatch one tick to the selected algorithm
pub fn advance(grid: &mut VoxelGrid, rule: &dyn RuleSet, algorithm: Algorithm) {
    match algorithm {
        Algorithm::Serial => step(grid, rule),
        Algorithm::Parallel => step_parallel(grid, rule),
    }
}
