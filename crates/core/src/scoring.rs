//! Scoring module - piece and line-clear awards, speed progression

use crate::types::{LINE_SCORE_UNIT, MIN_SPEED, PIECES_PER_SPEEDUP, PIECE_SCORE};

/// Flat award for locking a piece, independent of any clear.
pub fn piece_score() -> u32 {
    PIECE_SCORE
}

/// Bonus for clearing `rows` rows at once: `2^rows * 100`, zero when nothing cleared.
pub fn line_clear_bonus(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    1u32.checked_shl(rows as u32)
        .unwrap_or(u32::MAX)
        .saturating_mul(LINE_SCORE_UNIT)
}

/// Speed threshold after the `pieces_placed`-th piece locked.
///
/// Every tenth piece shortens the interval by one tick, never below `min_speed`.
pub fn next_speed(speed: u32, pieces_placed: u32, min_speed: u32) -> u32 {
    let floor = min_speed.max(1);
    if pieces_placed > 0 && pieces_placed % PIECES_PER_SPEEDUP == 0 && speed > floor {
        speed - 1
    } else {
        speed.max(floor)
    }
}

/// [`next_speed`] with the default floor.
pub fn next_default_speed(speed: u32, pieces_placed: u32) -> u32 {
    next_speed(speed, pieces_placed, MIN_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_bonus_doubles() {
        assert_eq!(line_clear_bonus(0), 0);
        assert_eq!(line_clear_bonus(1), 200);
        assert_eq!(line_clear_bonus(2), 400);
        assert_eq!(line_clear_bonus(3), 800);
        assert_eq!(line_clear_bonus(4), 1600);
    }

    #[test]
    fn test_piece_score_is_flat() {
        assert_eq!(piece_score(), 25);
    }

    #[test]
    fn test_speed_steps_every_tenth_piece() {
        assert_eq!(next_default_speed(20, 9), 20);
        assert_eq!(next_default_speed(20, 10), 19);
        assert_eq!(next_default_speed(19, 11), 19);
        assert_eq!(next_default_speed(11, 100), 10);
        assert_eq!(next_default_speed(10, 110), 10);
    }

    #[test]
    fn test_zero_floor_is_lifted_to_one() {
        assert_eq!(next_speed(1, 10, 0), 1);
    }
}
