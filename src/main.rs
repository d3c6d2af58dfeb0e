//! Terminal Tetris runner (default binary).
//!
//! Opens the terminal, plays one game at a fixed 50 ms tick, then prints the final
//! score on the restored terminal and waits for Enter.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::warn;

use console_tetris::core::{GameConfig, GameState};
use console_tetris::input::TerminalInput;
use console_tetris::runner::{run, EndReason, ThreadPacer};
use console_tetris::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut game = GameState::with_seed(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut input = TerminalInput::new();
    match input.enable_release_events() {
        Ok(true) => {}
        Ok(false) => warn!("terminal reports no key releases; using release timeout"),
        Err(e) => warn!("keyboard enhancement query failed: {e}"),
    }

    let result = run(&mut game, &mut input, &mut term, &mut ThreadPacer);

    // Always try to restore terminal state.
    let _ = input.restore();
    let _ = term.exit();

    let summary = result?;
    match summary.reason {
        EndReason::GameOver => {
            println!("Game Over! Score: {}", summary.score);
            println!("Lines: {}  Pieces: {}", summary.lines, summary.pieces);
            wait_for_enter()?;
        }
        EndReason::Quit => println!("Score: {}", summary.score),
    }
    Ok(())
}

/// Route `log` records to `TETRIS_LOG_PATH` when set; the terminal itself is busy.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn wait_for_enter() -> Result<()> {
    print!("Press Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
