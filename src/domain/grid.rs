use super::CellState;

/// VoxelGrid is the bordered, double-buffered cube the automaton lives in.
///
/// The interior spans `1..=edge` on every axis. Index 0 and `edge + 1` form a
/// boundary shell that is never written, so it stays empty in both buffers
/// and neighbor reads never need bounds checks.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    edge: usize,
    dim: usize,
    current: Vec<CellState>,
    next: Vec<CellState>,
    /// Set once the write buffer holds results that have not been committed
    pending: bool,
}

impl VoxelGrid {
    /// Create a zero-filled grid with `edge` interior cells per axis
    pub fn new(edge: usize) -> Self {
        assert!(edge > 0, "grid edge must be positive");
        let dim = edge + 2;
        Self {
            edge,
            dim,
            current: vec![CellState::EMPTY; dim * dim * dim],
            next: vec![CellState::EMPTY; dim * dim * dim],
            pending: false,
        }
    }

    /// Interior cells per axis
    pub const fn edge(&self) -> usize {
        self.edge
    }

    /// Cells per axis including the boundary shell
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Linear index of (x, y, z) in either buffer
    #[inline]
    pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.dim + y) * self.dim + x
    }

    #[inline]
    pub const fn is_interior(&self, x: usize, y: usize, z: usize) -> bool {
        x >= 1 && x <= self.edge && y >= 1 && y <= self.edge && z >= 1 && z <= self.edge
    }

    /// Read the committed state at (x, y, z). The boundary shell reads as empty.
    ///
    /// # Panics
    /// Coordinates past the boundary shell are a programming error.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> CellState {
        assert!(
            x < self.dim && y < self.dim && z < self.dim,
            "cell ({}, {}, {}) outside {}^3 grid",
            x,
            y,
            z,
            self.dim
        );
        self.current[self.index(x, y, z)]
    }

    /// Write into the pending buffer. Only interior cells may be written.
    pub fn set_next(&mut self, x: usize, y: usize, z: usize, state: CellState) {
        assert!(
            self.is_interior(x, y, z),
            "set_next({}, {}, {}) outside interior 1..={}",
            x,
            y,
            z,
            self.edge
        );
        let idx = self.index(x, y, z);
        self.next[idx] = state;
        self.pending = true;
    }

    /// Write directly into the committed buffer. Used for seeding between ticks.
    pub fn set_current(&mut self, x: usize, y: usize, z: usize, state: CellState) {
        assert!(
            self.is_interior(x, y, z),
            "set_current({}, {}, {}) outside interior 1..={}",
            x,
            y,
            z,
            self.edge
        );
        let idx = self.index(x, y, z);
        self.current[idx] = state;
    }

    /// Publish the pending buffer by exchanging the two buffers.
    /// With nothing written since the last commit this does nothing.
    pub fn commit(&mut self) {
        if !self.pending {
            return;
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.pending = false;
    }

    /// Whether the write buffer holds uncommitted results
    pub const fn has_pending(&self) -> bool {
        self.pending
    }

    /// Committed buffer, read-only, for a full transition pass
    pub fn cells(&self) -> &[CellState] {
        &self.current
    }

    /// Split into the committed buffer (read) and the write buffer.
    /// The caller is expected to fill every interior cell before `commit`.
    pub fn buffers_mut(&mut self) -> (&[CellState], &mut [CellState]) {
        self.pending = true;
        (&self.current, &mut self.next)
    }

    /// Zero both buffers and drop anything pending
    pub fn clear(&mut self) {
        self.current.fill(CellState::EMPTY);
        self.next.fill(CellState::EMPTY);
        self.pending = false;
    }

    /// Number of non-empty cells in the committed buffer
    pub fn population(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate interior coordinates in z/y/x order
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let edge = self.edge;
        (1..=edge).flat_map(move |z| {
            (1..=edge).flat_map(move |y| (1..=edge).map(move |x| (x, y, z)))
        })
    }

    /// Iterate non-empty interior cells with their positions
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, usize, CellState)> + '_ {
        self.interior()
            .map(|(x, y, z)| (x, y, z, self.current[self.index(x, y, z)]))
            .filter(|(_, _, _, state)| state.is_alive())
    }

    /// True when every cell of the boundary shell is empty in both buffers
    pub fn boundary_is_empty(&self) -> bool {
        let last = self.dim - 1;
        (0..self.dim).all(|z| {
            (0..self.dim).all(|y| {
                (0..self.dim).all(|x| {
                    let on_shell = x == 0 || y == 0 || z == 0 || x == last || y == last || z == last;
                    if !on_shell {
                        return true;
                    }
                    let idx = self.index(x, y, z);
                    self.current[idx].is_empty() && self.next[idx].is_empty()
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty_and_bordered() {
        let grid = VoxelGrid::new(50);
        assert_eq!(grid.edge(), 50);
        assert_eq!(grid.dim(), 52);
        assert_eq!(grid.cells().len(), 52 * 52 * 52);
        assert_eq!(grid.population(), 0);
        assert!(grid.boundary_is_empty());
    }

    #[test]
    fn test_boundary_reads_empty() {
        let grid = VoxelGrid::new(4);
        assert_eq!(grid.get(0, 0, 0), CellState::EMPTY);
        assert_eq!(grid.get(5, 5, 5), CellState::EMPTY);
        assert_eq!(grid.get(0, 3, 5), CellState::EMPTY);
    }

    #[test]
    #[should_panic]
    fn test_get_past_boundary_panics() {
        let grid = VoxelGrid::new(4);
        grid.get(6, 1, 1);
    }

    #[test]
    #[should_panic]
    fn test_set_next_on_boundary_panics() {
        let mut grid = VoxelGrid::new(4);
        grid.set_next(0, 1, 1, CellState::NEWBORN);
    }

    #[test]
    fn test_set_next_is_invisible_until_commit() {
        let mut grid = VoxelGrid::new(4);
        grid.set_next(2, 3, 4, CellState::new(3));
        assert_eq!(grid.get(2, 3, 4), CellState::EMPTY);
        assert!(grid.has_pending());

        grid.commit();
        assert_eq!(grid.get(2, 3, 4), CellState::new(3));
        assert!(!grid.has_pending());
    }

    #[test]
    fn test_second_commit_is_noop() {
        let mut grid = VoxelGrid::new(4);
        grid.set_current(1, 1, 1, CellState::new(2));
        grid.set_next(1, 1, 1, CellState::new(1));
        grid.commit();
        let snapshot = grid.cells().to_vec();

        grid.commit();
        assert_eq!(grid.cells(), snapshot.as_slice());
        assert_eq!(grid.get(1, 1, 1), CellState::new(1));
    }

    #[test]
    fn test_interior_iteration_covers_every_cell_once() {
        let grid = VoxelGrid::new(3);
        let cells: Vec<_> = grid.interior().collect();
        assert_eq!(cells.len(), 27);
        assert_eq!(cells.first(), Some(&(1, 1, 1)));
        assert_eq!(cells.last(), Some(&(3, 3, 3)));
    }

    #[test]
    fn test_live_cells_and_clear() {
        let mut grid = VoxelGrid::new(4);
        grid.set_current(1, 2, 3, CellState::new(4));
        grid.set_current(4, 4, 4, CellState::new(1));

        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(
            live,
            vec![(1, 2, 3, CellState::new(4)), (4, 4, 4, CellState::new(1))]
        );

        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
