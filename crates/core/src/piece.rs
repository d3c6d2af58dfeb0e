//! Active piece - the player-controlled tetromino

use crate::shapes;
use crate::types::PieceKind;

/// Active falling piece.
///
/// `x`/`y` locate the top-left corner of the piece's 4x4 block in field coordinates;
/// `y` may be negative while the piece is still entering the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i16,
    pub y: i16,
}

impl Tetromino {
    /// Create a piece in its canonical orientation at `(x, y)`.
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Same piece shifted by `(dx, dy)`.
    pub fn shifted(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same piece turned one quarter clockwise.
    pub fn rotated_cw(self) -> Self {
        Self {
            rotation: (self.rotation + 1) % 4,
            ..self
        }
    }

    /// Absolute field coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let (px, py) = (self.x, self.y);
        shapes::occupied_cells(self.kind, self.rotation)
            .map(move |(lx, ly)| (px + lx as i16, py + ly as i16))
    }
}
