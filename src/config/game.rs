/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as the tick cadence,
/// grid dimensions, and the messages shown when a session ends.
pub const TICK_INTERVAL_MS: u64 = 700; // Delay between two agent moves.

/// Number of rows (and columns) in the game grid.
pub const GRID_SIZE: usize = 4;

/// Total number of cells in the game grid.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Cell the warrior occupies when a session starts.
pub const START_INDEX: usize = 0;

/// Points displayed by the transient notification when gold is collected.
pub const GOLD_REWARD: u32 = 1000;

/// Chance for each eligible cell to hold a pit when generating a world.
pub const PIT_PROBABILITY: f64 = 0.2;

/// Cells kept free of hazards around the start position.
pub const SAFE_START_AREA: [usize; 4] = [0, 1, GRID_SIZE, GRID_SIZE + 1];

pub const DEATH_MESSAGE: &str = "the warrior died.";
pub const WIN_MESSAGE: &str = "you killed the Wumpus! You win!";
