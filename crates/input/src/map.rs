//! Key mapping from terminal events to logical controls.
//!
//! Bindings are fixed.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the control it drives.
pub fn control_for_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::SoftDrop),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Control::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(control_for_key(KeyCode::Left), Some(Control::MoveLeft));
        assert_eq!(control_for_key(KeyCode::Right), Some(Control::MoveRight));
        assert_eq!(control_for_key(KeyCode::Down), Some(Control::SoftDrop));
        assert_eq!(control_for_key(KeyCode::Char('A')), Some(Control::MoveLeft));
        assert_eq!(control_for_key(KeyCode::Char('d')), Some(Control::MoveRight));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(control_for_key(KeyCode::Char(' ')), Some(Control::Rotate));
        assert_eq!(control_for_key(KeyCode::Up), Some(Control::Rotate));
        assert_eq!(control_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
