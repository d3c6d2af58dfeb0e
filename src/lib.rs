//! Console Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under `console_tetris::{core,input,term,types}`
//! and hosts the fixed-tick [`runner`] that wires them together.

pub use console_tetris_core as core;
pub use console_tetris_input as input;
pub use console_tetris_term as term;
pub use console_tetris_types as types;

pub mod runner;
