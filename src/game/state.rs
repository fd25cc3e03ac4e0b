use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::config::game::{DEATH_MESSAGE, START_INDEX, WIN_MESSAGE};
use crate::game::grid::{clear_occupancy, occupied_cells, place_warrior};
use crate::game::resolver::{resolve_move, MoveOutcome, Step};
use crate::game::types::{CellIndex, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Won,
    Died,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        *self != Phase::Running
    }
}

/// What a single tick changed, for the session controller to broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub moved_to: Option<CellIndex>,
    pub gold_collected: bool,
    pub phase: Phase,
}

/// State of one play-through, from the fetched world to a terminal outcome.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: Uuid,
    pub grid: Grid,
    pub agent: CellIndex,
    pub phase: Phase,
    pub message: String,
    pub gold_collected: bool,
    pub visited: BTreeSet<CellIndex>,
}

impl SessionState {
    /// Start a session on a freshly fetched grid, with the warrior at the start cell.
    pub fn start(id: Uuid, mut grid: Grid) -> Self {
        place_warrior(&mut grid, START_INDEX);
        info!("[SessionState] Session {} started", id);
        SessionState {
            id,
            grid,
            agent: START_INDEX,
            phase: Phase::Running,
            message: String::new(),
            gold_collected: false,
            visited: BTreeSet::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Move the warrior once. Does nothing once the session is over.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        if self.is_over() {
            return TickReport { moved_to: None, gold_collected: false, phase: self.phase };
        }

        match resolve_move(&self.grid, self.agent, rng) {
            MoveOutcome::Advanced(step) => {
                let report = self.apply_step(step);
                debug!("[SessionState] {} moved to {}", self.id, self.agent);
                report
            }
            MoveOutcome::Won { step, wumpus_at } => {
                let mut report = self.apply_step(step);
                info!("[SessionState] {} killed the Wumpus at {}", self.id, wumpus_at);
                self.finish(Phase::Won, WIN_MESSAGE);
                report.phase = self.phase;
                report
            }
            MoveOutcome::Died => {
                info!("[SessionState] {} died at {}", self.id, self.agent);
                self.finish(Phase::Died, DEATH_MESSAGE);
                TickReport { moved_to: None, gold_collected: false, phase: self.phase }
            }
        }
    }

    fn apply_step(&mut self, step: Step) -> TickReport {
        self.visited.insert(step.from);
        self.grid = step.grid;
        self.agent = step.to;
        debug_assert_eq!(occupied_cells(&self.grid), vec![self.agent]);
        if step.gold_collected {
            self.gold_collected = true;
        }
        TickReport { moved_to: Some(step.to), gold_collected: step.gold_collected, phase: self.phase }
    }

    fn finish(&mut self, phase: Phase, message: &str) {
        self.phase = phase;
        self.message = message.to_string();
        clear_occupancy(&mut self.grid);
    }
}
