//! Neighbor classification for the 26-cell Moore neighborhood in 3D.
//!
//! The 26 neighbors split into three classes by how many axes their offset
//! touches: 6 faces (one axis), 12 edges (two axes) and 8 corners (three axes).
//! Offsets are generated from the full 3x3x3 block rather than listed by hand.

use std::sync::LazyLock;

use super::CellState;

/// A unit step in (x, y, z)
pub type Offset = [i32; 3];

pub const FACE_NEIGHBORS: usize = 6;
pub const EDGE_NEIGHBORS: usize = 12;
pub const CORNER_NEIGHBORS: usize = 8;

/// The three neighbor classes of a cubic lattice cell
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NeighborClass {
    Face,
    Edge,
    Corner,
}

impl NeighborClass {
    /// Number of axes a neighbor of this class is offset along
    pub const fn axes(self) -> usize {
        match self {
            NeighborClass::Face => 1,
            NeighborClass::Edge => 2,
            NeighborClass::Corner => 3,
        }
    }

    /// Classify an offset. The zero offset (the cell itself) has no class.
    pub fn of(offset: Offset) -> Option<Self> {
        match offset.iter().filter(|&&d| d != 0).count() {
            1 => Some(NeighborClass::Face),
            2 => Some(NeighborClass::Edge),
            3 => Some(NeighborClass::Corner),
            _ => None,
        }
    }
}

/// All offsets of one class, in z/y/x scan order of the surrounding block
pub fn offsets(class: NeighborClass) -> Vec<Offset> {
    (-1..=1)
        .flat_map(|dz| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| [dx, dy, dz])))
        .filter(|&offset| NeighborClass::of(offset) == Some(class))
        .collect()
}

pub static FACE_OFFSETS: LazyLock<Vec<Offset>> = LazyLock::new(|| offsets(NeighborClass::Face));
pub static EDGE_OFFSETS: LazyLock<Vec<Offset>> = LazyLock::new(|| offsets(NeighborClass::Edge));
pub static CORNER_OFFSETS: LazyLock<Vec<Offset>> =
    LazyLock::new(|| offsets(NeighborClass::Corner));

/// Live-neighbor tally of one cell, split by class
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct NeighborCounts {
    pub face: u8,
    pub edge: u8,
    pub corner: u8,
}

impl NeighborCounts {
    pub const fn new(face: u8, edge: u8, corner: u8) -> Self {
        Self { face, edge, corner }
    }

    /// Live neighbors across all three classes
    pub const fn total(self) -> u8 {
        self.face + self.edge + self.corner
    }
}

/// Neighbor offsets flattened to linear index deltas for a bordered lattice.
///
/// Only valid for interior indices: the one-cell boundary shell guarantees
/// every delta stays inside the buffer.
#[derive(Clone, Debug)]
pub struct Neighborhood {
    face: [isize; FACE_NEIGHBORS],
    edge: [isize; EDGE_NEIGHBORS],
    corner: [isize; CORNER_NEIGHBORS],
}

impl Neighborhood {
    /// Build deltas for a cube buffer with `dim` cells per axis (border included)
    pub fn for_dim(dim: usize) -> Self {
        Self {
            face: linear_deltas(&FACE_OFFSETS, dim),
            edge: linear_deltas(&EDGE_OFFSETS, dim),
            corner: linear_deltas(&CORNER_OFFSETS, dim),
        }
    }

    /// Count live neighbors of the cell at `index`.
    ///
    /// With `classify_all` unset, a cell with no live face neighbor returns
    /// early with zero edge and corner counts.
    #[inline]
    pub fn count(&self, cells: &[CellState], index: usize, classify_all: bool) -> NeighborCounts {
        let live = |deltas: &[isize]| {
            deltas
                .iter()
                .filter(|&&d| cells[index.wrapping_add_signed(d)].is_alive())
                .count() as u8
        };

        let face = live(&self.face[..]);
        if face == 0 && !classify_all {
            return NeighborCounts::default();
        }

        NeighborCounts {
            face,
            edge: live(&self.edge[..]),
            corner: live(&self.corner[..]),
        }
    }
}

fn linear_deltas<const N: usize>(offsets: &[Offset], dim: usize) -> [isize; N] {
    debug_assert_eq!(offsets.len(), N);
    let dim = dim as isize;
    let mut deltas = [0isize; N];
    for (slot, &[dx, dy, dz]) in deltas.iter_mut().zip(offsets) {
        *slot = (dz as isize * dim + dy as isize) * dim + dx as isize;
    }
    deltas
}
