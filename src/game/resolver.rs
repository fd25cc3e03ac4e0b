//! Move resolution for the autonomous warrior.
//!
//! Each tick the warrior walks to a uniformly random neighbor that holds
//! neither a pit nor the Wumpus. The random source is a parameter so the
//! walk can be replayed from a seed.

use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::grid::neighbors;
use crate::game::types::{CellIndex, Grid};

/// A completed move. `grid` is the board after the move; the input grid is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub from: CellIndex,
    pub to: CellIndex,
    pub grid: Grid,
    pub gold_collected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Non-terminal move; the session keeps ticking.
    Advanced(Step),
    /// The warrior smelled the Wumpus next door and killed it.
    Won { step: Step, wumpus_at: CellIndex },
    /// Every neighbor is a pit or the Wumpus.
    Died,
}

/// Neighbors of `index` the warrior can enter.
pub fn safe_neighbors(grid: &Grid, index: CellIndex) -> Vec<CellIndex> {
    neighbors(index).filter(|&n| grid.cell(n).is_safe()).collect()
}

/// Compute the warrior's next move from `from`.
pub fn resolve_move<R: Rng + ?Sized>(grid: &Grid, from: CellIndex, rng: &mut R) -> MoveOutcome {
    let safe = safe_neighbors(grid, from);
    let Some(&to) = safe.choose(rng) else {
        return MoveOutcome::Died;
    };

    let mut next = *grid;
    next.cell_mut(from).has_warrior = false;
    next.cell_mut(to).has_warrior = true;

    let gold_collected = next.cell(to).has_gold;
    if gold_collected {
        next.cell_mut(to).has_gold = false;
    }

    if next.cell(to).has_stench {
        match neighbors(to).find(|&n| next.cell(n).has_wumpus) {
            Some(wumpus_at) => {
                next.cell_mut(wumpus_at).has_wumpus = false;
                next.cell_mut(to).has_stench = false;
                let step = Step { from, to, grid: next, gold_collected };
                return MoveOutcome::Won { step, wumpus_at };
            }
            None => {
                // Upstream world is inconsistent; keep walking.
                warn!("[Resolver] Stench at {} without an adjacent Wumpus", to);
            }
        }
    }

    MoveOutcome::Advanced(Step { from, to, grid: next, gold_collected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::GRID_CELLS;
    use crate::game::grid::place_warrior;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with_warrior_at(index: CellIndex) -> Grid {
        let mut grid = Grid::default();
        place_warrior(&mut grid, index);
        grid
    }

    #[test]
    fn test_boxed_in_corner_dies() {
        let mut grid = grid_with_warrior_at(0);
        grid.cell_mut(1).has_pit = true;
        grid.cell_mut(4).has_pit = true;
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(resolve_move(&grid, 0, &mut rng), MoveOutcome::Died);
    }

    #[test]
    fn test_surrounded_by_hazards_always_dies() {
        let mut grid = grid_with_warrior_at(5);
        grid.cell_mut(1).has_pit = true;
        grid.cell_mut(4).has_wumpus = true;
        grid.cell_mut(6).has_pit = true;
        grid.cell_mut(9).has_pit = true;
        grid.cell_mut(9).has_wumpus = true;

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(resolve_move(&grid, 5, &mut rng), MoveOutcome::Died);
        }
    }

    #[test]
    fn test_single_safe_neighbor_is_chosen() {
        let mut grid = grid_with_warrior_at(5);
        grid.cell_mut(1).has_pit = true;
        grid.cell_mut(4).has_pit = true;
        grid.cell_mut(9).has_wumpus = true;

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            match resolve_move(&grid, 5, &mut rng) {
                MoveOutcome::Advanced(step) => {
                    assert_eq!(step.to, 6);
                    assert!(!step.grid.cell(5).has_warrior);
                    assert!(step.grid.cell(6).has_warrior);
                }
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_hazard_free_surroundings_never_die() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(7);
        for index in 0..GRID_CELLS {
            let outcome = resolve_move(&grid_with_warrior_at(index), index, &mut rng);
            assert!(matches!(outcome, MoveOutcome::Advanced(_)), "died at {}", index);
        }
        // The input is never mutated.
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_gold_is_collected_once() {
        let mut grid = grid_with_warrior_at(0);
        grid.cell_mut(4).has_pit = true;
        grid.cell_mut(1).has_gold = true;
        let mut rng = StdRng::seed_from_u64(3);

        let MoveOutcome::Advanced(first) = resolve_move(&grid, 0, &mut rng) else {
            panic!("expected a move to 1");
        };
        assert!(first.gold_collected);
        assert!(!first.grid.cell(1).has_gold);

        // Walk back to 0 and into 1 again: no second pickup.
        let mut back = first.grid;
        back.cell_mut(1).has_warrior = false;
        back.cell_mut(0).has_warrior = true;
        let MoveOutcome::Advanced(second) = resolve_move(&back, 0, &mut rng) else {
            panic!("expected a move to 1");
        };
        assert_eq!(second.to, 1);
        assert!(!second.gold_collected);
    }

    #[test]
    fn test_stench_next_to_wumpus_wins() {
        // Warrior at 0, only exit is 1 (stench), Wumpus at 2.
        let mut grid = grid_with_warrior_at(0);
        grid.cell_mut(4).has_pit = true;
        grid.cell_mut(1).has_stench = true;
        grid.cell_mut(2).has_wumpus = true;
        let mut rng = StdRng::seed_from_u64(11);

        match resolve_move(&grid, 0, &mut rng) {
            MoveOutcome::Won { step, wumpus_at } => {
                assert_eq!(wumpus_at, 2);
                assert_eq!(step.to, 1);
                assert!(!step.grid.cell(2).has_wumpus);
                assert!(!step.grid.cell(1).has_stench);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_stench_without_wumpus_keeps_playing() {
        let mut grid = grid_with_warrior_at(0);
        grid.cell_mut(4).has_pit = true;
        grid.cell_mut(1).has_stench = true;
        let mut rng = StdRng::seed_from_u64(5);

        match resolve_move(&grid, 0, &mut rng) {
            MoveOutcome::Advanced(step) => {
                assert_eq!(step.to, 1);
                assert!(step.grid.cell(1).has_stench);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_choice_covers_every_safe_neighbor() {
        let grid = grid_with_warrior_at(5);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let MoveOutcome::Advanced(step) = resolve_move(&grid, 5, &mut rng) {
                seen.insert(step.to);
            }
        }
        assert_eq!(seen, [1, 4, 6, 9].into_iter().collect());
    }
}
