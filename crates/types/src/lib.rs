//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board engine, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! The playfield is the classic 2048 grid:
//!
//! - **Size**: 4x4 cells, stored row-major (index = row * 4 + col)
//! - **Empty cell**: 0
//! - **Tiles**: powers of two starting at 2
//!
//! # Spawn Odds
//!
//! A spawned tile is a 2 in nine out of ten draws and a 4 otherwise, matching
//! the standard 2048 distribution. A fresh game starts with two spawned tiles.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! assert_eq!(GRID_SIZE, 4);
//!
//! // Vertical moves normalize through a transpose.
//! let (transpose, reverse) = Direction::Up.normalization();
//! assert!(transpose);
//! assert!(!reverse);
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_eq!(action, GameAction::Move(Direction::Left));
//! ```

/// Side length of the square grid (4 columns x 4 rows)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles spawned at game start
pub const START_TILES: usize = 2;

/// Out of [`SPAWN_DRAW_SIDES`] draws, this many produce a 2 (the rest a 4)
pub const SPAWN_TWO_ODDS: u32 = 9;

/// Number of sides on the spawn-value die
pub const SPAWN_DRAW_SIDES: u32 = 10;

/// The four move axes
///
/// Every direction reduces to a single "slide left" routine through a
/// `(transpose, reverse)` normalization pair:
///
/// - **Left**: neither
/// - **Right**: reverse each row
/// - **Up**: transpose
/// - **Down**: transpose, then reverse each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed scan order
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::all().len(), 4);
    /// assert_eq!(Direction::all()[0], Direction::Up);
    /// ```
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// The `(transpose, reverse)` pair that maps this direction onto
    /// "slide left"
    pub fn normalization(&self) -> (bool, bool) {
        match self {
            Direction::Left => (false, false),
            Direction::Right => (false, true),
            Direction::Up => (true, false),
            Direction::Down => (true, true),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Directional keys map to `Move`; everything else the engine understands is
/// listed here. Unknown keys never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge tiles toward one edge
    Move(Direction),
    /// Abandon the current board and start a fresh game
    Restart,
}
