//! Fixed-tick game loop.
//!
//! Each iteration sleeps one tick, samples the input source, advances the
//! simulation and presents a frame. When a lock completes rows the marked rows are
//! presented, held on screen for the flash duration, collapsed, and presented again.
//! The sleep is the only suspension point.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use crate::core::{GameState, PieceSource};
use crate::term::{FrameBuffer, GameView, Present};
use crate::types::{Controls, GamePhase, InputSource};

/// Blocks the loop between ticks.
pub trait Pacer {
    fn sleep(&mut self, duration: Duration);
}

/// Real-time pacing with `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    GameOver,
    Quit,
}

/// Final numbers of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub reason: EndReason,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
}

impl Summary {
    fn of<S: PieceSource>(game: &GameState<S>, reason: EndReason) -> Self {
        Self {
            reason,
            score: game.score(),
            lines: game.lines_cleared(),
            pieces: game.pieces_placed(),
        }
    }
}

/// Run a game until it is over or the input source asks to quit.
pub fn run<S, I, P, T>(
    game: &mut GameState<S>,
    input: &mut I,
    presenter: &mut P,
    pacer: &mut T,
) -> Result<Summary>
where
    S: PieceSource,
    I: InputSource + ?Sized,
    P: Present + ?Sized,
    T: Pacer + ?Sized,
{
    let tick = Duration::from_millis(game.config().tick_ms as u64);
    let flash = Duration::from_millis(game.config().flash_ms as u64);

    let view = GameView::new();
    let (w, h) = GameView::screen_size(game.playfield().width(), game.playfield().height());
    let mut fb = FrameBuffer::new(w, h);

    game.start();
    view.render_into(game, &mut fb);
    presenter.present(&fb)?;

    while !game.is_game_over() {
        pacer.sleep(tick);

        input.poll()?;
        if input.quit_requested() {
            let summary = Summary::of(game, EndReason::Quit);
            info!("player quit: {:?}", summary);
            return Ok(summary);
        }

        let phase = game.tick(Controls::sample(&*input));
        view.render_into(game, &mut fb);
        presenter.present(&fb)?;

        if phase == GamePhase::Clearing {
            pacer.sleep(flash);
            game.finish_clearing();
            view.render_into(game, &mut fb);
            presenter.present(&fb)?;
        }
    }

    let summary = Summary::of(game, EndReason::GameOver);
    info!("game finished: {:?}", summary);
    Ok(summary)
}
