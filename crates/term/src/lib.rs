//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay. It renders
//! into a framebuffer that is handed to a pluggable [`Present`] backend:
//!
//! - [`GameView`] turns a `GameState` into a frame (pure, unit-testable)
//! - [`TerminalRenderer`] flushes frames to a crossterm terminal, diffing against
//!   the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use console_tetris_core as core;
pub use console_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::{GameView, FIELD_OFFSET, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use renderer::{Present, TerminalRenderer};
