//! Snapshot module - plain-data view of the game state
//!
//! The renderer consumes snapshots rather than reaching into `GameState`,
//! which keeps the view layer pure and unit-testable.

use crate::types::GRID_SIZE;

/// Render-facing copy of everything the view needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Tile values by (row, col); 0 for empty
    pub cells: [[u32; GRID_SIZE]; GRID_SIZE],
    /// Running score
    pub score: u32,
    /// Largest tile currently on the grid
    pub highest_tile: u32,
    /// Terminal state: no empty cell and no adjacent equal pair
    pub game_over: bool,
    /// Current RNG state (carried for restart)
    pub seed: u32,
}
