//! Shapes module - piece catalog and rotation mapping
//!
//! Every piece is a 16-cell mask stored row-major in a 4x4 block (`index = y * 4 + x`).
//! Rotation never rewrites a mask: [`map_index`] translates a local coordinate in the
//! rotated block back into an index of the canonical mask.

use crate::types::{PieceKind, PIECE_BLOCK, PIECE_COUNT};

/// Canonical (0°) shape masks, one per [`PieceKind`], `X` marks an occupied cell.
const MASKS: [&[u8; 16]; PIECE_COUNT] = [
    b"..X...X...X...X.",
    b"..X..XX..X......",
    b".X...XX...X.....",
    b".....XX..XX.....",
    b"..X..XX...X.....",
    b".....XX...X...X.",
    b".....XX..X...X..",
];

/// Map a local coordinate of a rotated 4x4 block to an index into the canonical mask.
///
/// Rotation is clockwise in quarter turns and taken mod 4, so any value is accepted.
#[inline(always)]
pub fn map_index(local_x: usize, local_y: usize, rotation: u8) -> usize {
    match rotation % 4 {
        0 => local_y * 4 + local_x,
        1 => 12 + local_y - local_x * 4,
        2 => 15 - local_y * 4 - local_x,
        _ => 3 - local_y + local_x * 4,
    }
}

/// Raw mask of a piece in its canonical orientation.
pub fn mask(kind: PieceKind) -> &'static [u8; 16] {
    MASKS[kind.index()]
}

/// Whether the local cell `(x, y)` of `kind` rotated by `rotation` is occupied.
#[inline(always)]
pub fn is_occupied(kind: PieceKind, rotation: u8, local_x: usize, local_y: usize) -> bool {
    mask(kind)[map_index(local_x, local_y, rotation)] == b'X'
}

/// Number of occupied cells in a shape (4 for every catalog entry).
pub fn occupied_count(kind: PieceKind) -> usize {
    mask(kind).iter().filter(|&&b| b == b'X').count()
}

/// Occupied local cells of a rotated piece, in row-major order of the rotated block.
pub fn occupied_cells(kind: PieceKind, rotation: u8) -> impl Iterator<Item = (usize, usize)> {
    (0..PIECE_BLOCK).flat_map(move |y| {
        (0..PIECE_BLOCK)
            .filter(move |&x| is_occupied(kind, rotation, x, y))
            .map(move |x| (x, y))
    })
}
