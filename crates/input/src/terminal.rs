//! `InputSource` backed by crossterm terminal events.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{terminal, QueueableCommand};

use crate::held::HeldKeys;
use crate::map::{control_for_key, should_quit};
use crate::types::{Control, InputSource};

/// Non-blocking terminal input.
///
/// Raw mode must already be enabled (the terminal renderer does this).
#[derive(Debug, Clone, Default)]
pub struct TerminalInput {
    keys: HeldKeys,
    quit: bool,
    enhanced: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: HeldKeys) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Ask the terminal for key release events.
    ///
    /// Returns whether the terminal supports them; without them held keys expire
    /// after the release timeout.
    pub fn enable_release_events(&mut self) -> io::Result<bool> {
        if !terminal::supports_keyboard_enhancement()? {
            return Ok(false);
        }
        let mut stdout = io::stdout();
        stdout.queue(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
        stdout.flush()?;
        self.enhanced = true;
        self.keys.set_release_events(true);
        Ok(true)
    }

    /// Undo [`enable_release_events`](Self::enable_release_events).
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.enhanced {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.queue(PopKeyboardEnhancementFlags)?;
        stdout.flush()?;
        self.enhanced = false;
        self.keys.set_release_events(false);
        Ok(())
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Event::Key(key) = event {
            self.handle_key(*key, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(key) {
                    self.quit = true;
                    return;
                }
                if let Some(control) = control_for_key(key.code) {
                    self.keys.press(control, now);
                }
            }
            KeyEventKind::Release => {
                if let Some(control) = control_for_key(key.code) {
                    self.keys.release(control);
                }
            }
        }
    }

    pub fn is_held_at(&self, control: Control, now: Instant) -> bool {
        self.keys.is_held_at(control, now)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        }
        Ok(())
    }

    fn is_held(&self, control: Control) -> bool {
        self.is_held_at(control, Instant::now())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
