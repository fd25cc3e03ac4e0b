//! Render projection.
//!
//! Maps the grid, the warrior position and the visited set to the tiles a
//! client draws. Also provides a compact text form for debug logs.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::config::game::{GRID_CELLS, GRID_SIZE};
use crate::game::types::{CellIndex, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Agent,
    Visited,
    Unexplored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub tile: Tile,
    pub wumpus: bool,
    pub stench: bool,
    pub breeze: bool,
    pub pit: bool,
    pub gold: bool,
}

impl TileView {
    fn placeholder() -> Self {
        TileView { tile: Tile::Unexplored, wumpus: false, stench: false, breeze: false, pit: false, gold: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<TileView>,
}

/// Build the board to display. Without a grid (world still loading) every tile is a placeholder.
pub fn project(grid: Option<&Grid>, agent: Option<CellIndex>, visited: &BTreeSet<CellIndex>) -> Board {
    let Some(grid) = grid else {
        return Board { tiles: vec![TileView::placeholder(); GRID_CELLS] };
    };

    let tiles = grid.cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let tile = if cell.has_warrior || agent == Some(index) {
                Tile::Agent
            } else if visited.contains(&index) {
                Tile::Visited
            } else {
                Tile::Unexplored
            };
            TileView {
                tile,
                wumpus: cell.has_wumpus,
                stench: cell.has_stench,
                breeze: cell.has_breeze,
                pit: cell.has_pit,
                gold: cell.has_gold,
            }
        })
        .collect();

    Board { tiles }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(GRID_SIZE) {
            for view in row {
                // Priority: warrior, Wumpus, pit, gold, then the floor.
                let symbol = match view {
                    v if v.tile == Tile::Agent => 'A',
                    v if v.wumpus => 'W',
                    v if v.pit => 'P',
                    v if v.gold => 'G',
                    v if v.tile == Tile::Visited => '.',
                    _ => '#',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::place_warrior;

    #[test]
    fn test_placeholder_board_while_loading() {
        let board = project(None, None, &BTreeSet::new());
        assert_eq!(board.tiles.len(), GRID_CELLS);
        assert!(board.tiles.iter().all(|t| *t == TileView::placeholder()));
    }

    #[test]
    fn test_agent_visited_and_features() {
        let mut grid = Grid::default();
        place_warrior(&mut grid, 5);
        grid.cell_mut(10).has_pit = true;
        grid.cell_mut(11).has_gold = true;
        let visited: BTreeSet<_> = [0, 1, 5].into_iter().collect();

        let board = project(Some(&grid), Some(5), &visited);
        assert_eq!(board.tiles[5].tile, Tile::Agent);
        assert_eq!(board.tiles[0].tile, Tile::Visited);
        assert_eq!(board.tiles[2].tile, Tile::Unexplored);
        assert!(board.tiles[10].pit);
        assert!(board.tiles[11].gold);
    }

    #[test]
    fn test_text_form() {
        let mut grid = Grid::default();
        place_warrior(&mut grid, 0);
        grid.cell_mut(3).has_wumpus = true;
        let board = project(Some(&grid), Some(0), &BTreeSet::new());
        let text = board.to_string();
        let first_row = text.lines().next().unwrap_or_default();
        assert_eq!(first_row, "A # # W ");
        assert_eq!(text.lines().count(), GRID_SIZE);
    }
}
