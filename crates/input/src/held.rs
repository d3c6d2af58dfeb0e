//! Held-key tracking for terminal environments.
//!
//! Terminals deliver key events, not key state. A control counts as held from its
//! press (or auto-repeat) event until either a release event arrives or, on terminals
//! that never send releases, the release timeout passes without another repeat.

use std::time::{Duration, Instant};

use crate::types::Control;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    pressed_at: [Option<Instant>; 4],
    /// The terminal reports release events, so no timeout applies.
    release_events: bool,
    key_release_timeout: Duration,
}

fn slot(control: Control) -> usize {
    match control {
        Control::MoveLeft => 0,
        Control::MoveRight => 1,
        Control::SoftDrop => 2,
        Control::Rotate => 3,
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            pressed_at: [None; 4],
            release_events: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS as u64),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms as u64);
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout.as_millis() as u32
    }

    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Record a press or auto-repeat.
    pub fn press(&mut self, control: Control, now: Instant) {
        self.pressed_at[slot(control)] = Some(now);
    }

    pub fn release(&mut self, control: Control) {
        self.pressed_at[slot(control)] = None;
    }

    pub fn is_held_at(&self, control: Control, now: Instant) -> bool {
        match self.pressed_at[slot(control)] {
            None => false,
            Some(_) if self.release_events => true,
            Some(at) => now.saturating_duration_since(at) <= self.key_release_timeout,
        }
    }

    pub fn reset(&mut self) {
        self.pressed_at = [None; 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
