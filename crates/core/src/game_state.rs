//! Game state module - the simulation driver
//!
//! Ties together playfield, fit testing, the piece source and scoring, and runs the
//! `Spawning -> Falling -> Locking -> Clearing -> Spawning` cycle. The caller drives it
//! with one [`GameState::tick`] per fixed time step; when a lock completes rows the
//! driver stops in [`GamePhase::Clearing`] so the caller can show the flash before
//! calling [`GameState::finish_clearing`].

use log::{debug, info};

use crate::config::GameConfig;
use crate::fit::fits;
use crate::piece::Tetromino;
use crate::playfield::{Playfield, RowSet};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{line_clear_bonus, next_speed, piece_score};
use crate::types::{Controls, GamePhase, PIECE_BLOCK};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    config: GameConfig,
    playfield: Playfield,
    active: Option<Tetromino>,
    source: S,
    phase: GamePhase,
    started: bool,
    score: u32,
    /// Ticks between forced descents.
    speed: u32,
    /// Ticks since the last forced descent of the active piece.
    tick_counter: u32,
    pieces_placed: u32,
    lines_cleared: u32,
    /// Rows marked by the last lock, waiting for `finish_clearing`.
    pending_clear: RowSet,
    /// Rotate control was seen released since the last rotation. Starts disarmed, so
    /// a rotate already held when the game starts needs a release first.
    rotate_armed: bool,
}

impl GameState<UniformPieces> {
    /// Create a game with uniformly random pieces drawn from `seed`.
    pub fn with_seed(config: GameConfig, seed: u32) -> Self {
        Self::new(config, UniformPieces::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game. The first piece spawns on [`start`](Self::start).
    pub fn new(config: GameConfig, source: S) -> Self {
        let config = config.normalized();
        let playfield = Playfield::new(config.field_width, config.field_height);
        let speed = config.initial_speed;

        Self {
            config,
            playfield,
            active: None,
            source,
            phase: GamePhase::Spawning,
            started: false,
            score: 0,
            speed,
            tick_counter: 0,
            pieces_placed: 0,
            lines_cleared: 0,
            pending_clear: RowSet::new(),
            rotate_armed: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mutable access for scripted setups (tests, benches, demos).
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn pending_clear(&self) -> &[usize] {
        &self.pending_clear
    }

    /// Spawn position for the current playfield.
    pub fn spawn_position(&self) -> (i16, i16) {
        ((self.playfield.width() / 2) as i16, 0)
    }

    /// Spawn a new piece at the top centre.
    ///
    /// Returns false and ends the game when the piece does not fit; the blocked piece
    /// is kept as `active` so it stays visible.
    pub fn spawn_piece(&mut self) -> bool {
        self.phase = GamePhase::Spawning;
        self.tick_counter = 0;

        let kind = self.source.next_piece();
        let (x, y) = self.spawn_position();
        let piece = Tetromino::new(kind, x, y);
        self.active = Some(piece);

        if !fits(piece.kind, piece.rotation, piece.x, piece.y, &self.playfield) {
            self.phase = GamePhase::GameOver;
            info!(
                "game over: score={} pieces={} lines={}",
                self.score, self.pieces_placed, self.lines_cleared
            );
            return false;
        }

        debug!("spawned {:?} at ({}, {})", kind, x, y);
        self.phase = GamePhase::Falling;
        true
    }

    /// Advance one fixed time step with the sampled control state.
    ///
    /// Order: horizontal move, soft drop, rotation (rising edge only), then the tick
    /// counter and, when it reaches the speed threshold, forced descent. Does nothing
    /// outside [`GamePhase::Falling`].
    pub fn tick(&mut self, controls: Controls) -> GamePhase {
        if self.phase != GamePhase::Falling {
            return self.phase;
        }

        if controls.right {
            self.try_move(1, 0);
        }
        if controls.left {
            self.try_move(-1, 0);
        }
        if controls.down {
            self.try_move(0, 1);
        }

        if controls.rotate {
            if self.rotate_armed {
                self.try_rotate();
            }
            self.rotate_armed = false;
        } else {
            self.rotate_armed = true;
        }

        self.tick_counter += 1;
        if self.tick_counter >= self.speed {
            self.tick_counter = 0;
            self.force_descent();
        }

        self.phase
    }

    /// Move the active piece if the destination fits.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.phase != GamePhase::Falling {
            return false;
        }

        let moved = active.shifted(dx, dy);
        if self.piece_fits(&moved) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Rotate the active piece a quarter turn clockwise if it fits in place.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.phase != GamePhase::Falling {
            return false;
        }

        let rotated = active.rotated_cw();
        if self.piece_fits(&rotated) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// Gravity step: move down one row, or lock when that is not possible.
    fn force_descent(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    fn piece_fits(&self, piece: &Tetromino) -> bool {
        fits(piece.kind, piece.rotation, piece.x, piece.y, &self.playfield)
    }

    /// Lock the active piece, score it and look for completed rows.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.phase = GamePhase::Locking;

        self.playfield.lock(&active);
        self.pieces_placed += 1;
        self.score = self.score.saturating_add(piece_score());
        self.speed = next_speed(self.speed, self.pieces_placed, self.config.min_speed);
        debug!(
            "locked {:?} at ({}, {}) rot={} pieces={} speed={}",
            active.kind, active.x, active.y, active.rotation, self.pieces_placed, self.speed
        );

        let rows = self.playfield.scan_completed_rows(active.y, PIECE_BLOCK);
        if rows.is_empty() {
            self.spawn_piece();
            return;
        }

        self.playfield.mark_rows(&rows);
        self.score = self.score.saturating_add(line_clear_bonus(rows.len()));
        debug!("completed rows {:?}", rows.as_slice());
        self.pending_clear = rows;
        self.phase = GamePhase::Clearing;
    }

    /// Collapse the marked rows and spawn the next piece.
    ///
    /// Call after the flash has been shown. Does nothing outside [`GamePhase::Clearing`].
    pub fn finish_clearing(&mut self) -> GamePhase {
        if self.phase != GamePhase::Clearing {
            return self.phase;
        }

        self.playfield.clear_and_collapse(&self.pending_clear);
        self.lines_cleared += self.pending_clear.len() as u32;
        self.pending_clear.clear();
        self.spawn_piece();
        self.phase
    }
}
