//! Fit testing - decides whether a piece may occupy a position
//!
//! Only occupied local cells that land inside the grid on both axes are checked
//! against the stored value. Cells above the top edge never collide, so pieces can
//! enter the field from above. Walls and floor need no special casing because
//! border cells are never empty.

use crate::playfield::Playfield;
use crate::shapes;
use crate::types::{PieceKind, PIECE_BLOCK};

/// Whether `kind` rotated by `rotation` fits with its block's top-left at `(pos_x, pos_y)`.
///
/// Rotation is taken mod 4.
pub fn fits(kind: PieceKind, rotation: u8, pos_x: i16, pos_y: i16, field: &Playfield) -> bool {
    let width = field.width() as i16;
    let height = field.height() as i16;

    for ly in 0..PIECE_BLOCK {
        for lx in 0..PIECE_BLOCK {
            let fx = pos_x + lx as i16;
            let fy = pos_y + ly as i16;
            if fx < 0 || fx >= width || fy < 0 || fy >= height {
                continue;
            }
            if !shapes::is_occupied(kind, rotation, lx, ly) {
                continue;
            }
            if field.get(fx, fy).is_some_and(|c| !c.is_empty()) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_fits_above_top_edge() {
        let field = Playfield::default();
        // The I piece occupies column 2 of its block for all four rows.
        assert!(fits(PieceKind::I, 0, 4, -3, &field));
    }

    #[test]
    fn test_locked_cell_blocks() {
        let mut field = Playfield::default();
        field.set_interior(6, 5, Cell::Locked(PieceKind::T));
        assert!(!fits(PieceKind::I, 0, 4, 3, &field));
        assert!(fits(PieceKind::I, 0, 5, 3, &field));
    }

    #[test]
    fn test_walls_block_on_oversized_field() {
        let field = Playfield::new(40000, 18);
        let right = field.width() as i16 - 1;
        // I occupies block column 2; anchor right - 2 puts it on the wall.
        assert!(!fits(PieceKind::I, 0, right - 2, 3, &field));
        assert!(fits(PieceKind::I, 0, right - 3, 3, &field));
        assert!(!fits(PieceKind::I, 0, -2, 3, &field));
    }

    #[test]
    fn test_marked_cell_blocks() {
        let mut field = Playfield::default();
        field.set_interior(6, 5, Cell::Marked);
        assert!(!fits(PieceKind::I, 0, 4, 3, &field));
    }
}
