//! Playfield module - manages the game grid
//!
//! The playfield is a `width x height` grid stored as a flat array in row-major order
//! (`index = y * width + x`). The left and right columns and the bottom row are
//! border cells; they are written once at construction and never change.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use arrayvec::ArrayVec;

use crate::piece::Tetromino;
use crate::types::{Cell, MAX_FIELD_SIDE, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH, PIECE_BLOCK};

/// Row indices of completed rows found in one lock (at most one piece block tall).
pub type RowSet = ArrayVec<usize, PIECE_BLOCK>;

/// The game grid, borders included.
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield. Dimensions are clamped to the accepted range.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.clamp(MIN_FIELD_WIDTH, MAX_FIELD_SIDE) as usize;
        let height = height.clamp(MIN_FIELD_HEIGHT, MAX_FIELD_SIDE) as usize;

        let mut cells = vec![Cell::Empty; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || x == width - 1 || y == height - 1 {
                    cells[y * width + x] = Cell::Border;
                }
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from signed coordinates.
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Overwrite an interior cell.
    ///
    /// Returns false (and leaves the grid untouched) for border or out-of-range cells,
    /// and for attempts to write `Cell::Border`.
    pub fn set_interior(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) if !self.is_border(x as usize, y as usize) && cell != Cell::Border => {
                self.cells[i] = cell;
                true
            }
            _ => false,
        }
    }

    /// Flat view of all cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, borders included.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Number of interior cells holding a locked piece or a flash marker.
    pub fn locked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Locked(_) | Cell::Marked))
            .count()
    }

    /// Write the piece's occupied cells into the grid.
    ///
    /// Cells outside the grid are skipped.
    pub fn lock(&mut self, piece: &Tetromino) {
        for (x, y) in piece.cells() {
            self.set_interior(x, y, Cell::Locked(piece.kind));
        }
    }

    /// Whether every interior cell of row `y` is non-empty. The bottom border row never
    /// counts as complete.
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y + 1 >= self.height {
            return false;
        }
        self.row(y)[1..self.width - 1].iter().all(|c| !c.is_empty())
    }

    /// Completed rows within `from_row .. from_row + row_span`, ordered top to bottom.
    ///
    /// Rows above the field or at/below the bottom border are skipped.
    pub fn scan_completed_rows(&self, from_row: i16, row_span: usize) -> RowSet {
        let mut rows = RowSet::new();
        for dy in 0..row_span.min(PIECE_BLOCK) {
            let y = from_row + dy as i16;
            if y < 0 {
                continue;
            }
            if self.is_row_complete(y as usize) {
                rows.push(y as usize);
            }
        }
        rows
    }

    /// Replace the interior of every given row with the flash marker.
    pub fn mark_rows(&mut self, rows: &[usize]) {
        let (w, h) = (self.width, self.height);
        for &y in rows.iter().filter(|&&y| y + 1 < h) {
            let start = y * w;
            self.cells[start + 1..start + w - 1].fill(Cell::Marked);
        }
    }

    /// Remove the given rows, shifting everything above each one down by one row.
    ///
    /// Rows are processed in the order given; with the top-to-bottom order produced by
    /// [`scan_completed_rows`](Self::scan_completed_rows) the indices of later rows stay
    /// valid because collapsing only moves content that lies above the cleared row.
    pub fn clear_and_collapse(&mut self, rows: &[usize]) {
        let (w, h) = (self.width, self.height);
        for &line in rows.iter().filter(|&&y| y + 1 < h) {
            for x in 1..w - 1 {
                for y in (1..=line).rev() {
                    self.cells[y * w + x] = self.cells[(y - 1) * w + x];
                }
                self.cells[x] = Cell::Empty;
            }
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(crate::types::FIELD_WIDTH, crate::types::FIELD_HEIGHT)
    }
}
