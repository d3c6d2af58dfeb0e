//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key events
//! onto the four logical [`crate::types::Control`]s and exposes them through the
//! [`crate::types::InputSource`] "is held" interface the game loop samples once per
//! tick. Terminals that never report key releases are handled with a release
//! timeout.

pub mod held;
pub mod map;
pub mod terminal;

pub use console_tetris_types as types;

pub use held::{HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{control_for_key, should_quit};
pub use terminal::TerminalInput;
