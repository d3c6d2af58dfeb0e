//! Simulation driver tests: falling, locking, scoring, clearing and speed-up

use console_tetris::core::{FixedPieces, GameConfig, GameState, PieceSource};
use console_tetris::types::{Cell, Controls, GamePhase, PieceKind, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};

const DOWN: Controls = Controls {
    left: false,
    right: false,
    down: true,
    rotate: false,
};

fn game(pieces: Vec<PieceKind>) -> GameState<FixedPieces> {
    let mut g = GameState::new(GameConfig::default(), FixedPieces::new(pieces));
    g.start();
    g
}

/// Hold soft drop until the active piece locks, collapsing any cleared rows.
fn drop_piece<S: PieceSource>(g: &mut GameState<S>) {
    let placed = g.pieces_placed();
    while g.pieces_placed() == placed && !g.is_game_over() {
        if g.tick(DOWN) == GamePhase::Clearing {
            g.finish_clearing();
        }
    }
}

fn fill_row_except(g: &mut GameState<FixedPieces>, y: i16, gap: i16) {
    let width = g.playfield().width() as i16;
    for x in 1..width - 1 {
        if x != gap {
            g.playfield_mut().set_interior(x, y, Cell::Locked(PieceKind::Z));
        }
    }
}

#[test]
fn test_square_spawns_centered_and_rests_on_floor() {
    let mut g = game(vec![PieceKind::O]);
    let active = g.active().unwrap();
    assert_eq!((active.x, active.y), (6, 0));
    assert_eq!(g.phase(), GamePhase::Falling);

    // Soft drop moves one row per tick until the floor stops it.
    for _ in 0..14 {
        g.tick(DOWN);
    }
    assert_eq!(g.active().unwrap().y, 14);
    g.tick(DOWN);
    assert_eq!(g.active().unwrap().y, 14);
    assert_eq!(g.pieces_placed(), 0);

    drop_piece(&mut g);
    assert_eq!(g.pieces_placed(), 1);
    assert_eq!(g.score(), 25);
    for (x, y) in [(7, 15), (8, 15), (7, 16), (8, 16)] {
        assert_eq!(g.playfield().get(x, y), Some(Cell::Locked(PieceKind::O)));
    }
    assert_eq!(g.playfield().locked_count(), 4);

    // Next piece is in play at the spawn point.
    let next = g.active().unwrap();
    assert_eq!((next.x, next.y), (6, 0));
}

#[test]
fn test_gravity_without_input_descends_every_speed_ticks() {
    let mut g = game(vec![PieceKind::T]);
    for _ in 0..19 {
        g.tick(Controls::NONE);
    }
    assert_eq!(g.active().unwrap().y, 0);
    g.tick(Controls::NONE);
    assert_eq!(g.active().unwrap().y, 1);
    assert_eq!(g.tick_counter(), 0);
}

#[test]
fn test_holding_rotate_turns_once() {
    let mut g = game(vec![PieceKind::I]);
    g.try_move(0, 3);
    let rotate = Controls {
        rotate: true,
        ..Controls::NONE
    };

    g.tick(Controls::NONE);
    g.tick(rotate);
    assert_eq!(g.active().unwrap().rotation, 1);
    g.tick(rotate);
    g.tick(rotate);
    assert_eq!(g.active().unwrap().rotation, 1);

    g.tick(Controls::NONE);
    g.tick(rotate);
    assert_eq!(g.active().unwrap().rotation, 2);
}

#[test]
fn test_walls_stop_horizontal_movement() {
    let mut g = game(vec![PieceKind::O]);
    let left = Controls {
        left: true,
        ..Controls::NONE
    };
    for _ in 0..15 {
        g.tick(left);
    }
    // Square columns are local 1..=2; the left wall is column 0.
    assert_eq!(g.active().unwrap().x, 0);
}

#[test]
fn test_single_row_clear_scores_two_hundred() {
    let mut g = game(vec![PieceKind::I, PieceKind::O]);
    // Bar falls down column 8; leave exactly that gap.
    fill_row_except(&mut g, 16, 8);

    let placed = g.pieces_placed();
    let mut phase = g.phase();
    while g.pieces_placed() == placed {
        phase = g.tick(DOWN);
    }
    assert_eq!(phase, GamePhase::Clearing);
    assert_eq!(g.score(), 25 + 200);
    assert_eq!(g.pending_clear(), &[16]);
    assert_eq!(g.playfield().get(1, 16), Some(Cell::Marked));
    assert!(g.active().is_none());

    // Nothing moves while the flash is up.
    assert_eq!(g.tick(DOWN), GamePhase::Clearing);

    let before = g.playfield().locked_count();
    assert_eq!(g.finish_clearing(), GamePhase::Falling);
    assert_eq!(g.playfield().locked_count(), before - 10);
    assert_eq!(g.lines_cleared(), 1);
    assert!(g.pending_clear().is_empty());

    // Bar remnants shifted down one row.
    for y in 14..=16 {
        assert_eq!(g.playfield().get(8, y), Some(Cell::Locked(PieceKind::I)));
    }
    assert_eq!(g.playfield().get(8, 13), Some(Cell::Empty));
    assert_eq!(g.active().unwrap().kind, PieceKind::O);
}

#[test]
fn test_multi_row_bonus_doubles_per_row() {
    for (rows, bonus) in [(2, 400), (3, 800), (4, 1600)] {
        let mut g = game(vec![PieceKind::I]);
        for k in 0..rows {
            fill_row_except(&mut g, 16 - k, 8);
        }

        let placed = g.pieces_placed();
        while g.pieces_placed() == placed {
            g.tick(DOWN);
        }
        assert_eq!(g.phase(), GamePhase::Clearing);
        assert_eq!(g.pending_clear().len(), rows as usize);
        assert_eq!(g.score(), 25 + bonus);

        g.finish_clearing();
        assert_eq!(g.lines_cleared(), rows as u32);
        assert_eq!(g.playfield().locked_count(), 4 - rows as usize);
    }
}

#[test]
fn test_speed_drops_every_ten_pieces() {
    let config = GameConfig {
        field_height: 60,
        ..GameConfig::default()
    };
    let mut g = GameState::new(config, FixedPieces::new(vec![PieceKind::O]));
    g.start();

    for _ in 0..9 {
        drop_piece(&mut g);
    }
    assert_eq!(g.speed(), 20);
    drop_piece(&mut g);
    assert_eq!(g.pieces_placed(), 10);
    assert_eq!(g.speed(), 19);

    for _ in 0..10 {
        drop_piece(&mut g);
    }
    assert_eq!(g.speed(), 18);
    assert_eq!(g.score(), 20 * 25);
}

#[test]
fn test_speed_never_drops_below_floor() {
    let config = GameConfig {
        field_height: 60,
        initial_speed: 10,
        ..GameConfig::default()
    };
    let mut g = GameState::new(config, FixedPieces::new(vec![PieceKind::O]));
    g.start();

    for _ in 0..20 {
        drop_piece(&mut g);
    }
    assert_eq!(g.speed(), 10);
}

#[test]
fn test_blocked_spawn_ends_the_game() {
    let mut g = game(vec![PieceKind::O]);
    for _ in 0..8 {
        drop_piece(&mut g);
    }
    assert!(g.is_game_over());
    assert_eq!(g.phase(), GamePhase::GameOver);
    assert_eq!(g.pieces_placed(), 8);
    assert_eq!(g.score(), 8 * 25);

    // The piece that could not enter stays visible.
    assert!(g.active().is_some());
    assert_eq!(g.tick(DOWN), GamePhase::GameOver);
    assert_eq!(g.score(), 8 * 25);
}

#[test]
fn test_smallest_field_accepts_every_piece() {
    let config = GameConfig::from_lookup(|key| match key {
        "TETRIS_FIELD_WIDTH" | "TETRIS_FIELD_HEIGHT" => Some("1".to_string()),
        _ => None,
    });
    assert_eq!(config.field_width, MIN_FIELD_WIDTH);
    assert_eq!(config.field_height, MIN_FIELD_HEIGHT);

    for kind in PieceKind::ALL {
        let mut g = GameState::new(config.clone(), FixedPieces::new(vec![kind]));
        g.start();
        assert_eq!(g.phase(), GamePhase::Falling, "{kind:?}");

        drop_piece(&mut g);
        assert_eq!(g.pieces_placed(), 1, "{kind:?}");
    }
}

#[test]
fn test_same_seed_replays_same_game() {
    let play = |seed| {
        let mut g = GameState::with_seed(GameConfig::default(), seed);
        g.start();
        let mut kinds = Vec::new();
        for _ in 0..5 {
            kinds.push(g.active().unwrap().kind);
            drop_piece(&mut g);
        }
        (kinds, g.score())
    };
    assert_eq!(play(7), play(7));
}
