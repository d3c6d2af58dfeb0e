//! Game configuration
//!
//! Defaults reproduce the classic 12x18 console game. Every field can be overridden
//! from the environment; values that do not parse are ignored and values out of
//! range are clamped by [`GameConfig::normalized`].

use std::env;

use crate::types::{
    FIELD_HEIGHT, FIELD_WIDTH, INITIAL_SPEED, LINE_FLASH_MS, MAX_FIELD_SIDE, MIN_FIELD_HEIGHT,
    MIN_FIELD_WIDTH, MIN_SPEED, TICK_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub field_width: u16,
    pub field_height: u16,
    pub tick_ms: u32,
    pub flash_ms: u32,
    pub initial_speed: u32,
    pub min_speed: u32,
    /// Piece RNG seed; `None` lets the binary pick one from the clock.
    pub seed: Option<u32>,
    /// Log file; logging stays off when unset because the game owns the terminal.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_ms: TICK_MS,
            flash_ms: LINE_FLASH_MS,
            initial_speed: INITIAL_SPEED,
            min_speed: MIN_SPEED,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let num = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        let field_width = num("TETRIS_FIELD_WIDTH")
            .map(|v| v.min(u16::MAX as u32) as u16)
            .unwrap_or(defaults.field_width);
        let field_height = num("TETRIS_FIELD_HEIGHT")
            .map(|v| v.min(u16::MAX as u32) as u16)
            .unwrap_or(defaults.field_height);
        let tick_ms = num("TETRIS_TICK_MS").unwrap_or(defaults.tick_ms);
        let flash_ms = num("TETRIS_FLASH_MS").unwrap_or(defaults.flash_ms);
        let initial_speed = num("TETRIS_INITIAL_SPEED").unwrap_or(defaults.initial_speed);
        let min_speed = num("TETRIS_MIN_SPEED").unwrap_or(defaults.min_speed);
        let seed = num("TETRIS_SEED");

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            field_width,
            field_height,
            tick_ms,
            flash_ms,
            initial_speed,
            min_speed,
            seed,
            log_path,
        }
        .normalized()
    }

    /// Clamp every value into its legal range.
    pub fn normalized(mut self) -> Self {
        self.field_width = self.field_width.clamp(MIN_FIELD_WIDTH, MAX_FIELD_SIDE);
        self.field_height = self.field_height.clamp(MIN_FIELD_HEIGHT, MAX_FIELD_SIDE);
        if self.tick_ms == 0 {
            self.tick_ms = TICK_MS;
        }
        self.min_speed = self.min_speed.max(1);
        self.initial_speed = self.initial_speed.max(self.min_speed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let cfg = GameConfig::from_lookup(|_| None);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_overrides_and_garbage() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("TETRIS_FIELD_WIDTH", "16"),
            ("TETRIS_FIELD_HEIGHT", "tall"),
            ("TETRIS_SEED", " 99 "),
            ("TETRIS_LOG_PATH", "  "),
        ]));
        assert_eq!(cfg.field_width, 16);
        assert_eq!(cfg.field_height, FIELD_HEIGHT);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_speed_overrides() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("TETRIS_INITIAL_SPEED", "15"),
            ("TETRIS_MIN_SPEED", "5"),
        ]));
        assert_eq!(cfg.initial_speed, 15);
        assert_eq!(cfg.min_speed, 5);

        // Start never sits below the floor.
        let cfg = GameConfig::from_lookup(lookup(&[
            ("TETRIS_INITIAL_SPEED", "4"),
            ("TETRIS_MIN_SPEED", "8"),
        ]));
        assert_eq!(cfg.initial_speed, 8);
    }

    #[test]
    fn test_tiny_width_is_raised_to_minimum() {
        let cfg = GameConfig::from_lookup(lookup(&[("TETRIS_FIELD_WIDTH", "1")]));
        assert_eq!(cfg.field_width, MIN_FIELD_WIDTH);
    }

    #[test]
    fn test_normalized_clamps() {
        let cfg = GameConfig {
            field_width: 2,
            field_height: 1000,
            tick_ms: 0,
            initial_speed: 3,
            min_speed: 0,
            ..GameConfig::default()
        }
        .normalized();
        assert_eq!(cfg.field_width, MIN_FIELD_WIDTH);
        assert_eq!(cfg.field_height, MAX_FIELD_SIDE);
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.min_speed, 1);
        assert_eq!(cfg.initial_speed, 3);
    }
}
