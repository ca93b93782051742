//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal as
//! a full frame after every accepted input.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from plain-data snapshots, never from live game state
//! - Allow precise control over aspect ratio (e.g. 7x3 chars per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
