//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, so they can
//! be used by the simulation core, the terminal renderer and the input layer alike.
//!
//! # Playfield Dimensions
//!
//! The default playfield is 12 columns by 18 rows. The outer left/right columns and
//! the bottom row are permanent border cells, leaving a 10-column interior.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed simulation step |
//! | `LINE_FLASH_MS` | 400 | How long completed rows stay highlighted |
//! | `INITIAL_SPEED` | 20 | Ticks between forced descents at game start |
//! | `MIN_SPEED` | 10 | Floor for the speed threshold |
//!
//! # Examples
//!
//! ```
//! use console_tetris_types::{Cell, PieceKind, FIELD_WIDTH};
//!
//! let kind = PieceKind::from_index(3).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(Cell::Locked(kind).value(), 4);
//! assert_eq!(Cell::Border.glyph(), '#');
//! assert_eq!(FIELD_WIDTH, 12);
//! ```

use std::io;

/// Playfield width in cells, borders included.
pub const FIELD_WIDTH: u16 = 12;

/// Playfield height in cells, bottom border included.
pub const FIELD_HEIGHT: u16 = 18;

/// Smallest playfield accepted; smaller requests are clamped.
///
/// Spawning at `x = width / 2` puts shape column 2 on `width / 2 + 2`, which is only
/// an interior column from 7 cells up.
pub const MIN_FIELD_WIDTH: u16 = 7;
pub const MIN_FIELD_HEIGHT: u16 = 6;

/// Largest accepted playfield side; keeps coordinates inside `i16` and the frame
/// inside a `u16` terminal.
pub const MAX_FIELD_SIDE: u16 = 200;

/// Side length of the square block every shape mask lives in.
pub const PIECE_BLOCK: usize = 4;

/// Number of shapes in the catalog.
pub const PIECE_COUNT: usize = 7;

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Duration completed rows stay highlighted before they collapse.
pub const LINE_FLASH_MS: u32 = 400;

/// Ticks between forced descents at game start.
pub const INITIAL_SPEED: u32 = 20;

/// The speed threshold never drops below this.
pub const MIN_SPEED: u32 = 10;

/// The speed threshold drops by one every this many placed pieces.
pub const PIECES_PER_SPEEDUP: u32 = 10;

/// Flat score awarded for every placed piece.
pub const PIECE_SCORE: u32 = 25;

/// Multiplier for the line-clear bonus (`2^rows * LINE_SCORE_UNIT`).
pub const LINE_SCORE_UNIT: u32 = 100;

/// Cell-to-glyph lookup, indexed by [`Cell::value`].
pub const GLYPHS: [char; 10] = [' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', '=', '#'];

/// Tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    O,
    T,
    L,
    J,
}

impl PieceKind {
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Look up a catalog entry by id (0-6).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog id (0-6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display letter used by the glyph table ('A' for id 0 ... 'G' for id 6).
    pub fn letter(self) -> char {
        GLYPHS[self.index() + 1]
    }
}

/// One playfield cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
    /// Row is complete and waiting to be collapsed.
    Marked,
    Border,
}

impl Cell {
    /// Numeric cell value: 0 empty, 1-7 locked shape (id + 1), 8 marked, 9 border.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Locked(kind) => kind.index() as u8 + 1,
            Cell::Marked => 8,
            Cell::Border => 9,
        }
    }

    pub fn glyph(self) -> char {
        GLYPHS[self.value() as usize]
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The four logical controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::SoftDrop,
        Control::Rotate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::MoveLeft => "moveLeft",
            Control::MoveRight => "moveRight",
            Control::SoftDrop => "softDrop",
            Control::Rotate => "rotate",
        }
    }
}

/// Point-in-time "is held" state of all four controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
}

impl Controls {
    pub const NONE: Controls = Controls {
        left: false,
        right: false,
        down: false,
        rotate: false,
    };

    /// Read every control from an input source.
    pub fn sample<I: InputSource + ?Sized>(input: &I) -> Self {
        Self {
            left: input.is_held(Control::MoveLeft),
            right: input.is_held(Control::MoveRight),
            down: input.is_held(Control::SoftDrop),
            rotate: input.is_held(Control::Rotate),
        }
    }

    pub fn only(control: Control) -> Self {
        let mut c = Self::NONE;
        c.set(control, true);
        c
    }

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::MoveLeft => self.left = held,
            Control::MoveRight => self.right = held,
            Control::SoftDrop => self.down = held,
            Control::Rotate => self.rotate = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
            Control::SoftDrop => self.down,
            Control::Rotate => self.rotate,
        }
    }
}

/// Source of control state for the game loop.
///
/// Implementations only answer "is this control held right now"; there is no
/// event queue, so taps shorter than one tick may be missed.
pub trait InputSource {
    /// Refresh internal key state. Must not block.
    fn poll(&mut self) -> io::Result<()>;

    fn is_held(&self, control: Control) -> bool;

    /// The player asked to leave the game.
    fn quit_requested(&self) -> bool {
        false
    }
}

impl InputSource for Controls {
    fn poll(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn is_held(&self, control: Control) -> bool {
        Controls::is_held(self, control)
    }
}

/// Simulation driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Spawning,
    Falling,
    Locking,
    /// Completed rows are marked and waiting for `finish_clearing`.
    Clearing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Spawning => "spawning",
            GamePhase::Falling => "falling",
            GamePhase::Locking => "locking",
            GamePhase::Clearing => "clearing",
            GamePhase::GameOver => "gameOver",
        }
    }
}
