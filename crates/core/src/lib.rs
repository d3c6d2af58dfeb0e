//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the playfield simulation. It has **no dependencies** on the
//! terminal, input devices or wall-clock time:
//!
//! - **Deterministic**: the same seed and control sequence replay the same game
//! - **Testable**: every rule can be driven tick by tick from unit tests
//! - **Allocation-free hot path**: fit tests and rotation never allocate
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven 4x4 shape masks and the rotation index mapping
//! - [`piece`]: the active piece (kind, rotation, anchor)
//! - [`fit`]: bounds and collision test for a candidate position
//! - [`playfield`]: bordered grid with locking, row scanning and collapsing
//! - [`scoring`]: per-piece and line-clear awards, speed progression
//! - [`rng`]: uniform random piece source
//! - [`config`]: game configuration with environment overrides
//! - [`game_state`]: the fixed-tick simulation driver
//!
//! # Example
//!
//! ```
//! use console_tetris_core::{GameConfig, GameState};
//! use console_tetris_core::types::{Controls, GamePhase};
//!
//! let mut game = GameState::with_seed(GameConfig::default(), 12345);
//! game.start();
//!
//! // Hold soft drop until the first piece locks.
//! let down = Controls { down: true, ..Controls::NONE };
//! while game.pieces_placed() == 0 {
//!     game.tick(down);
//! }
//! assert_eq!(game.score(), 25);
//! assert_eq!(game.phase(), GamePhase::Falling);
//! ```

pub mod config;
pub mod fit;
pub mod game_state;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use console_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use fit::fits;
pub use game_state::GameState;
pub use piece::Tetromino;
pub use playfield::{Playfield, RowSet};
pub use rng::{FixedPieces, PieceSource, SimpleRng, UniformPieces};
pub use scoring::{line_clear_bonus, next_speed, piece_score};
pub use shapes::map_index;
