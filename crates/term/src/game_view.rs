//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playfield is drawn one character per cell
//! through the fixed glyph table, the active piece on top of it, and the score
//! panel to the right of the field.

use crate::core::{GameState, PieceSource, Playfield};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind};

/// Minimum screen size; larger playfields grow the frame as needed.
pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 24;

/// Top-left corner of the playfield on screen.
pub const FIELD_OFFSET: u16 = 2;

/// Columns between the right edge of the playfield and the score panel.
const PANEL_GAP: u16 = 4;

/// Width of a `LABEL: %8d` panel line.
const PANEL_LINE_WIDTH: u16 = 15;

const BORDER_STYLE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FLASH_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const SCORE_STYLE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const STAT_STYLE: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160));
const GAME_OVER_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 90, 90)).bold();

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Screen size needed to show a playfield of the given dimensions.
    pub fn screen_size(field_width: usize, field_height: usize) -> (u16, u16) {
        let fw = field_width.min(u16::MAX as usize) as u16;
        let fh = field_height.min(u16::MAX as usize) as u16;
        let w = FIELD_OFFSET
            .saturating_add(fw)
            .saturating_add(PANEL_GAP)
            .saturating_add(FIELD_OFFSET)
            .saturating_add(PANEL_LINE_WIDTH);
        let h = FIELD_OFFSET.saturating_add(fh).saturating_add(1);
        (w.max(SCREEN_WIDTH), h.max(SCREEN_HEIGHT))
    }

    /// Screen column of the score panel.
    pub fn panel_x(field_width: usize) -> u16 {
        FIELD_OFFSET + field_width as u16 + PANEL_GAP
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized when the
    /// playfield needs a larger screen.
    pub fn render_into<S: PieceSource>(&self, game: &GameState<S>, fb: &mut FrameBuffer) {
        let field = game.playfield();
        let (w, h) = Self::screen_size(field.width(), field.height());
        fb.resize(w, h);
        fb.clear();

        self.draw_field(fb, field);

        if let Some(active) = game.active() {
            let style = piece_style(active.kind);
            for (x, y) in active.cells() {
                if x < 0 || y < 0 {
                    continue;
                }
                fb.put_char(
                    FIELD_OFFSET + x as u16,
                    FIELD_OFFSET + y as u16,
                    active.kind.letter(),
                    style,
                );
            }
        }

        self.draw_panel(fb, game);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: PieceSource>(&self, game: &GameState<S>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        self.render_into(game, &mut fb);
        fb
    }

    fn draw_field(&self, fb: &mut FrameBuffer, field: &Playfield) {
        let width = field.width();
        for (i, cell) in field.cells().iter().enumerate() {
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            fb.put_char(
                FIELD_OFFSET + x,
                FIELD_OFFSET + y,
                cell.glyph(),
                cell_style(*cell),
            );
        }
    }

    fn draw_panel<S: PieceSource>(&self, fb: &mut FrameBuffer, game: &GameState<S>) {
        let x = Self::panel_x(game.playfield().width());
        let lines = [
            ("SCORE", game.score(), SCORE_STYLE),
            ("LINES", game.lines_cleared(), STAT_STYLE),
            ("SPEED", game.speed(), STAT_STYLE),
        ];
        for (row, (label, value, style)) in (FIELD_OFFSET..).zip(lines) {
            fb.put_str(x, row, &format!("{label}: {value:8}"), style);
        }

        if game.is_game_over() {
            fb.put_str(x, FIELD_OFFSET + 4, "GAME OVER", GAME_OVER_STYLE);
        }
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
    };
    CellStyle::fg(fg).bold()
}

fn cell_style(cell: Cell) -> CellStyle {
    match cell {
        Cell::Empty => CellStyle::default(),
        Cell::Locked(kind) => piece_style(kind),
        Cell::Marked => FLASH_STYLE,
        Cell::Border => BORDER_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_has_floor() {
        assert_eq!(GameView::screen_size(12, 18), (SCREEN_WIDTH, SCREEN_HEIGHT));
    }

    #[test]
    fn test_screen_size_grows_with_field() {
        let (w, h) = GameView::screen_size(100, 60);
        assert!(w >= FIELD_OFFSET + 100 + PANEL_GAP + PANEL_LINE_WIDTH);
        assert_eq!(h, FIELD_OFFSET + 60 + 1);
    }

    #[test]
    fn test_panel_sits_four_columns_right_of_field() {
        assert_eq!(GameView::panel_x(12), 18);
    }
}
