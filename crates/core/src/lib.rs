//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and board
//! operations. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: O(16) work per move, no allocation on the move path
//!
//! # Module Structure
//!
//! - [`grid`]: the 4x4 tile matrix with transpose/reverse helpers and the
//!   game-over predicate
//! - [`moves`]: compress -> merge -> compress and the directional shift
//! - [`rng`]: seeded LCG and the 2-or-4 tile spawner
//! - [`game_state`]: the move/spawn/game-over state machine
//! - [`snapshot`]: plain-data view consumed by renderers
//!
//! # Game Rules
//!
//! - Every move normalizes to "slide left" via transpose/reverse, then
//!   left-packs each row, merges adjacent equal pairs once per pass, and
//!   left-packs again.
//! - A move that changes the board spawns one tile (2 at 90%, 4 at 10%)
//!   into a uniformly random empty cell; an unchanged move is a no-op.
//! - The game ends when the grid is full and no two adjacent cells match.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! let moved = game.apply_action(GameAction::Move(Direction::Left));
//! if moved {
//!     // The follow-up tile spawn always finds room after a changed move.
//!     assert!(game.grid().count_empty() >= 1);
//! }
//! ```

pub mod game_state;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use moves::{compress, merge, shift, slide_row, MoveOutcome};
pub use rng::{SimpleRng, SpawnedTile, TileSpawner};
pub use snapshot::GameSnapshot;
