// step.rs - one synchronous generation of the B3/S23 rule

use crate::grid::Grid;

const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Advance `grid` by one generation.
///
/// Pure: reads only the previous snapshot and returns an independent grid
/// of the same extents. Every cell is decided from the previous generation,
/// and neighbors outside the grid count as dead (no wraparound). The caller
/// pairs this with [`GridState::advance`](crate::grid::GridState::advance)
/// to bump the generation counter.
pub fn step(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut next = vec![false; rows * cols];
    for row in 0..rows {
        for col in 0..cols {
            let alive = grid.cell(row, col);
            let count = live_neighbors(grid, row, col);
            next[row * cols + col] = match (alive, count) {
                (true, 2) | (true, 3) => true, // survival
                (false, 3) => true,            // birth
                _ => false,
            };
        }
    }
    Grid::from_cells(rows, cols, next)
}

fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBORS {
        let r = row as i64 + dr;
        let c = col as i64 + dc;
        if r >= 0 && c >= 0 && grid.cell(r as usize, c as usize) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut cells = vec![false; rows * cols];
        for &(r, c) in alive {
            cells[r * cols + c] = true;
        }
        Grid::from_cells(rows, cols, cells)
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if grid.cell(r, c) {
                    out.push((r, c));
                }
            }
        }
        out
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut grid = Grid::dead(8, 8);
        for _ in 0..5 {
            grid = step(&grid);
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn underpopulation_kills() {
        // Lone cell, and a pair (one neighbor each): all die.
        let grid = grid_of(6, 6, &[(1, 1), (4, 4), (4, 5)]);
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn overpopulation_kills() {
        // Center of a plus sign has 4 neighbors and dies.
        let grid = grid_of(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        assert!(!step(&grid).cell(2, 2));
    }

    #[test]
    fn survival_on_two_or_three() {
        // Block: every cell has exactly 3 neighbors.
        let block = grid_of(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(step(&block), block);

        // Middle of a 3-cell line has 2 neighbors and survives.
        let line = grid_of(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        assert!(step(&line).cell(2, 2));
    }

    #[test]
    fn birth_on_exactly_three() {
        // L triple: the corner completion at (2,2) is born.
        let grid = grid_of(5, 5, &[(1, 1), (1, 2), (2, 1)]);
        assert!(step(&grid).cell(2, 2));

        // Two neighbors only: nothing is born.
        let grid = grid_of(5, 5, &[(1, 1), (1, 3)]);
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn block_is_stable_across_generations() {
        let block = grid_of(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let mut grid = block.clone();
        for _ in 0..10 {
            grid = step(&grid);
            assert_eq!(grid, block);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let vertical = grid_of(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let horizontal = step(&vertical);
        assert_eq!(alive_cells(&horizontal), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(step(&horizontal), vertical);
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let shape = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let at = |dr: usize, dc: usize| {
            let cells: Vec<_> = shape.iter().map(|&(r, c)| (r + dr, c + dc)).collect();
            grid_of(20, 20, &cells)
        };

        let mut grid = at(5, 5);
        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(grid, at(6, 6));

        for _ in 0..4 {
            grid = step(&grid);
        }
        assert_eq!(grid, at(7, 7));
    }

    #[test]
    fn edges_do_not_wrap() {
        // A vertical blinker centered on the left edge: its horizontal phase
        // would need column -1, which is off-grid, so only two cells remain
        // and the shape then dies instead of oscillating back.
        let grid = grid_of(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let next = step(&grid);
        assert_eq!(alive_cells(&next), vec![(2, 0), (2, 1)]);
        assert_eq!(step(&next).population(), 0);

        // Opposite edges do not see each other as neighbors.
        let far = grid_of(5, 5, &[(0, 0), (0, 4), (4, 0), (4, 4)]);
        assert_eq!(step(&far).population(), 0);
    }
}
