use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::config::game::{GRID_CELLS, GRID_SIZE};

/// Linear cell address: `row * GRID_SIZE + col`.
pub type CellIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Neighbor scan order used everywhere a cell's surroundings are inspected.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
}

/// One grid position. Field names on the wire follow the world service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "wumpus")]
    pub has_wumpus: bool,
    #[serde(rename = "cheiro")]
    pub has_stench: bool,
    #[serde(rename = "brisa")]
    pub has_breeze: bool,
    #[serde(rename = "poco")]
    pub has_pit: bool,
    #[serde(rename = "ouro")]
    pub has_gold: bool,
    #[serde(rename = "guerreiro")]
    pub has_warrior: bool,
}

impl Cell {
    /// A cell the warrior can walk into without dying.
    pub fn is_safe(&self) -> bool {
        !self.has_wumpus && !self.has_pit
    }
}

/// The 4x4 board, stored row-major.
///
/// `Grid` is a plain value: every game step produces a new one instead of
/// mutating the grid currently on display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireGrid", into = "WireGrid")]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

/// Shape of the world service payload: `{"malha": [[Cell; 4]; 4]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireGrid {
    pub malha: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridShapeError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
}

impl TryFrom<WireGrid> for Grid {
    type Error = GridShapeError;

    fn try_from(wire: WireGrid) -> Result<Self, Self::Error> {
        if wire.malha.len() != GRID_SIZE {
            return Err(GridShapeError::RowCount { expected: GRID_SIZE, found: wire.malha.len() });
        }
        let mut grid = Grid::default();
        for (row, cells) in wire.malha.into_iter().enumerate() {
            if cells.len() != GRID_SIZE {
                return Err(GridShapeError::RowLength { row, expected: GRID_SIZE, found: cells.len() });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = cell;
            }
        }
        Ok(grid)
    }
}

impl From<Grid> for WireGrid {
    fn from(grid: Grid) -> Self {
        WireGrid {
            malha: grid.cells.chunks(GRID_SIZE).map(|row| row.to_vec()).collect(),
        }
    }
}

impl Grid {
    pub fn cells(&self) -> &[Cell; GRID_CELLS] {
        &self.cells
    }

    /// Panics if `index` is outside the board; callers only pass indices
    /// produced by `grid::neighbors` or the start constant.
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_row(cell: &str) -> String {
        format!("[{cell},{cell},{cell},{cell}]")
    }

    #[test]
    fn test_parses_world_service_payload() {
        let empty = r#"{"wumpus":false,"cheiro":false,"brisa":false,"poco":false,"ouro":false,"guerreiro":false}"#;
        let row = wire_row(empty);
        let mut rows = vec![row.clone(); GRID_SIZE];
        rows[1] = format!(
            r#"[{empty},{empty},{{"wumpus":false,"cheiro":true,"brisa":true,"poco":false,"ouro":true,"guerreiro":false}},{empty}]"#
        );
        let payload = format!(r#"{{"malha":[{}]}}"#, rows.join(","));

        let grid: Grid = serde_json::from_str(&payload).expect("valid world");
        let cell = grid.cell(6);
        assert!(cell.has_stench && cell.has_breeze && cell.has_gold);
        assert!(!cell.has_pit && !cell.has_wumpus);
        assert_eq!(grid.cells().iter().filter(|c| c.has_gold).count(), 1);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let empty = r#"{"wumpus":false,"cheiro":false,"brisa":false,"poco":false,"ouro":false,"guerreiro":false}"#;
        let three_rows = format!(r#"{{"malha":[{0},{0},{0}]}}"#, wire_row(empty));
        assert!(serde_json::from_str::<Grid>(&three_rows).is_err());

        let short_row = format!(r#"{{"malha":[{0},{0},{0},[{1}]]}}"#, wire_row(empty), empty);
        assert!(serde_json::from_str::<Grid>(&short_row).is_err());
    }

    #[test]
    fn test_serializes_row_major() {
        let mut grid = Grid::default();
        grid.cell_mut(7).has_pit = true;
        let value = serde_json::to_value(grid).expect("serializable");
        assert_eq!(value["malha"][1][3]["poco"], true);
        assert_eq!(value["malha"][0][3]["poco"], false);
    }
}
