//! World generation.
//!
//! Builds a fresh 4x4 world: one Wumpus, a scattering of pits and one piece
//! of gold, with stench and breeze hints around the hazards. The cells around
//! the start position never receive a hazard or the gold.

use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::game::{GRID_CELLS, PIT_PROBABILITY, SAFE_START_AREA};
use crate::game::grid::neighbors;
use crate::game::types::{CellIndex, Grid};

/// Pick a random cell that is not in `excluded`, if one is left.
fn random_cell<R: Rng + ?Sized>(rng: &mut R, excluded: &[CellIndex]) -> Option<CellIndex> {
    let candidates: Vec<CellIndex> = (0..GRID_CELLS).filter(|i| !excluded.contains(i)).collect();
    candidates.choose(rng).copied()
}

/// Drop the gold on a free cell. Returns where it landed; `None` when pits cover every candidate.
fn place_gold<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, excluded: &[CellIndex]) -> Option<CellIndex> {
    let gold = random_cell(rng, excluded)?;
    grid.cell_mut(gold).has_gold = true;
    Some(gold)
}

pub fn generate_world<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::default();
    let mut excluded: Vec<CellIndex> = SAFE_START_AREA.to_vec();

    if let Some(wumpus) = random_cell(rng, &excluded) {
        grid.cell_mut(wumpus).has_wumpus = true;
        for n in neighbors(wumpus) {
            grid.cell_mut(n).has_stench = true;
        }
    }

    for index in 0..GRID_CELLS {
        if !excluded.contains(&index) && rng.random_bool(PIT_PROBABILITY) {
            grid.cell_mut(index).has_pit = true;
            for n in neighbors(index) {
                grid.cell_mut(n).has_breeze = true;
            }
            excluded.push(index);
        }
    }

    if place_gold(&mut grid, rng, &excluded).is_none() {
        warn!("[Generator] No free cell left for the gold");
    }

    grid
}
