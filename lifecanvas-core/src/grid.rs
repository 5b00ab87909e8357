// grid.rs - fixed-bounds cell field with copy-on-write snapshots

use std::sync::Arc;

use rand::Rng;

/// Immutable snapshot of the cell field.
///
/// Cloning is cheap (cell storage is shared behind an `Arc`); mutating
/// operations return a fresh snapshot instead of writing in place, so a
/// clone held by the render pass can never observe a half-applied change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Arc<[bool]>,
}

impl Grid {
    /// All-dead grid of the given extents.
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols].into(),
        }
    }

    /// Grid with each cell independently alive with probability `density`.
    pub fn random<R: Rng>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let cells: Vec<bool> = (0..rows * cols).map(|_| rng.gen_bool(density)).collect();
        Self {
            rows,
            cols,
            cells: cells.into(),
        }
    }

    /// Build a grid from a row-major cell vector.
    ///
    /// Panics if `cells.len() != rows * cols`; callers always size the
    /// vector from the same extents they pass in.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cell vector does not match extents");
        Self {
            rows,
            cols,
            cells: cells.into(),
        }
    }

    /// Height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state. Anything outside the grid reads as dead.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            false
        }
    }

    /// New snapshot with one cell changed. An out-of-range write is dropped
    /// and yields an unchanged snapshot.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, alive: bool) -> Self {
        if row >= self.rows || col >= self.cols {
            return self.clone();
        }
        let mut cells = self.cells.to_vec();
        cells[row * self.cols + col] = alive;
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: cells.into(),
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Owns the current grid snapshot and the generation counter.
///
/// Every content change swaps in a whole new [`Grid`], so readers holding a
/// [`GridState::snapshot`] keep a consistent view while the state moves on.
#[derive(Clone, Debug)]
pub struct GridState {
    grid: Grid,
    generation: u64,
}

impl GridState {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cheap clone of the current snapshot for the render pass.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.grid.cell(row, col)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Paint a single cell. Out-of-range writes are dropped.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        self.grid = self.grid.with_cell(row, col, alive);
    }

    /// All dead, generation back to 0.
    pub fn reset(&mut self) {
        self.grid = Grid::dead(self.grid.rows(), self.grid.cols());
        self.generation = 0;
    }

    /// Wholesale replacement that restarts history (pattern load, reseed).
    pub fn replace(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    /// Wholesale replacement that completes a generation step.
    pub fn advance(&mut self, next: Grid) {
        self.grid = next;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dead_grid_is_empty() {
        let grid = Grid::dead(10, 20);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn out_of_range_reads_dead() {
        let grid = Grid::dead(5, 5).with_cell(4, 4, true);
        assert!(grid.cell(4, 4));
        assert!(!grid.cell(5, 4));
        assert!(!grid.cell(4, 5));
        assert!(!grid.cell(100, 100));
    }

    #[test]
    fn out_of_range_writes_dropped() {
        let grid = Grid::dead(5, 5);
        let same = grid.with_cell(5, 0, true).with_cell(0, 5, true);
        assert_eq!(same.population(), 0);
        assert_eq!(same, grid);
    }

    #[test]
    fn snapshots_are_independent() {
        let before = Grid::dead(5, 5);
        let after = before.with_cell(2, 3, true);
        assert!(!before.cell(2, 3));
        assert!(after.cell(2, 3));
        assert_eq!(before.population(), 0);
        assert_eq!(after.population(), 1);
    }

    #[test]
    fn random_fill_tracks_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(100, 100, 0.1, &mut rng);
        let pop = grid.population();
        // 10_000 cells at 10%: anywhere near 1_000 is fine.
        assert!(pop > 500 && pop < 1500, "population {pop}");
    }

    #[test]
    fn state_set_reset_replace() {
        let mut state = GridState::new(Grid::dead(4, 4));
        state.set_cell(1, 1, true);
        assert!(state.cell(1, 1));

        state.set_cell(9, 9, true);
        assert_eq!(state.grid().population(), 1);

        state.reset();
        assert_eq!(state.grid().population(), 0);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn advance_counts_generations_and_replace_restarts() {
        let mut state = GridState::new(Grid::dead(4, 4));
        state.advance(Grid::dead(4, 4));
        state.advance(Grid::dead(4, 4));
        assert_eq!(state.generation(), 2);

        state.replace(Grid::dead(4, 4).with_cell(0, 0, true));
        assert_eq!(state.generation(), 0);
        assert!(state.cell(0, 0));
    }

    #[test]
    fn snapshot_survives_later_writes() {
        let mut state = GridState::new(Grid::dead(4, 4));
        let held = state.snapshot();
        state.set_cell(0, 0, true);
        state.advance(Grid::dead(4, 4).with_cell(3, 3, true));
        assert_eq!(held.population(), 0);
    }
}
