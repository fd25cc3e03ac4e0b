//! Grid geometry and occupancy helpers.
//!
//! Indices are linear (`row * GRID_SIZE + col`). Neighbor lookups never wrap
//! around a row or past the board edges.

use crate::config::game::{GRID_CELLS, GRID_SIZE};
use crate::game::types::{CellIndex, Direction, Grid};

pub fn row_of(index: CellIndex) -> usize {
    index / GRID_SIZE
}

pub fn col_of(index: CellIndex) -> usize {
    index % GRID_SIZE
}

/// Index reached by moving one cell in `direction`, if it stays on the board.
pub fn step(index: CellIndex, direction: Direction) -> Option<CellIndex> {
    if index >= GRID_CELLS {
        return None;
    }
    match direction {
        Direction::Left => (col_of(index) > 0).then(|| index - 1),
        Direction::Right => (col_of(index) < GRID_SIZE - 1).then(|| index + 1),
        Direction::Up => (row_of(index) > 0).then(|| index - GRID_SIZE),
        Direction::Down => (row_of(index) < GRID_SIZE - 1).then(|| index + GRID_SIZE),
    }
}

/// Orthogonal neighbors of `index`, in left, right, up, down order.
/// Corners have 2, edges 3, interior cells 4.
pub fn neighbors(index: CellIndex) -> impl Iterator<Item = CellIndex> {
    Direction::ALL.into_iter().filter_map(move |dir| step(index, dir))
}

/// Remove the warrior marker from every cell.
pub fn clear_occupancy(grid: &mut Grid) {
    for index in 0..GRID_CELLS {
        grid.cell_mut(index).has_warrior = false;
    }
}

/// Clear any stale marker and put the warrior on `index`.
pub fn place_warrior(grid: &mut Grid, index: CellIndex) {
    clear_occupancy(grid);
    grid.cell_mut(index).has_warrior = true;
}

pub fn occupied_cells(grid: &Grid) -> Vec<CellIndex> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.has_warrior)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_stay_on_board() {
        for index in 0..GRID_CELLS {
            for n in neighbors(index) {
                assert!(n < GRID_CELLS, "{} lists off-board neighbor {}", index, n);
                // Horizontal moves keep the row, vertical moves keep the column.
                assert!(
                    row_of(n) == row_of(index) || col_of(n) == col_of(index),
                    "{} -> {} crosses a row boundary", index, n
                );
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(neighbors(0).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(neighbors(3).collect::<Vec<_>>(), vec![2, 7]);
        assert_eq!(neighbors(5).collect::<Vec<_>>(), vec![4, 6, 1, 9]);
        assert_eq!(neighbors(13).count(), 3);
        assert_eq!(neighbors(15).collect::<Vec<_>>(), vec![14, 11]);
    }

    #[test]
    fn test_row_end_does_not_wrap() {
        assert!(!neighbors(3).any(|n| n == 4));
        assert!(!neighbors(4).any(|n| n == 3));
        assert!(!neighbors(11).any(|n| n == 12));
    }

    #[test]
    fn test_step_off_board() {
        assert_eq!(step(0, Direction::Up), None);
        assert_eq!(step(12, Direction::Down), None);
        assert_eq!(step(16, Direction::Left), None);
    }

    #[test]
    fn test_place_warrior_is_exclusive() {
        let mut grid = Grid::default();
        grid.cell_mut(7).has_warrior = true;
        place_warrior(&mut grid, 0);
        assert_eq!(occupied_cells(&grid), vec![0]);
        clear_occupancy(&mut grid);
        assert!(occupied_cells(&grid).is_empty());
    }
}
