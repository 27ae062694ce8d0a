//! Integration tests for the game loop: falling, fixing, clearing, levels and game over

use blockfall::core::{GameEvent, GameState, SequenceSource, StepOutcome};
use blockfall::types::{Color, GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn game_of(kind: PieceKind) -> GameState<SequenceSource> {
    GameState::with_source(SequenceSource::repeat(kind))
}

/// Fill row `y` except the listed columns.
fn fill_row_except<S: blockfall::core::PieceSource>(game: &mut GameState<S>, y: i8, gaps: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            game.board_mut().set(x, y, Some(Color::Blue));
        }
    }
}

/// Tick until the piece is fixed. Returns the fixing outcome and the number of falls.
fn drop_to_rest<S: blockfall::core::PieceSource>(game: &mut GameState<S>) -> (StepOutcome, u32) {
    let mut falls = 0;
    loop {
        match game.tick() {
            StepOutcome::Fell => falls += 1,
            other => return (other, falls),
        }
    }
}

#[test]
fn test_new_game_is_running_with_a_piece() {
    let game = GameState::new(12345);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.piece_id(), 1);
    assert_eq!(game.active().y, 0);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_piece_falls_to_floor_then_fixes() {
    let mut game = game_of(PieceKind::I);
    let (outcome, falls) = drop_to_rest(&mut game);

    assert_eq!(outcome, StepOutcome::Fixed { lines_cleared: 0 });
    assert_eq!(falls, BOARD_HEIGHT as u32 - 1);
    for x in 3..7 {
        assert_eq!(game.board().get(x, 19), Some(Some(Color::Cyan)));
    }
    assert_eq!(game.piece_id(), 2);
    assert_eq!(game.active().y, 0);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_moves_stop_at_walls() {
    let mut game = game_of(PieceKind::O);
    while game.move_left() {}
    assert_eq!(game.active().x, 0);
    assert!(!game.move_left());

    while game.move_right() {}
    assert_eq!(game.active().x, BOARD_WIDTH as i8 - 2);
}

#[test]
fn test_moves_stop_at_fixed_cells() {
    let mut game = game_of(PieceKind::O);
    game.board_mut().set(2, 0, Some(Color::Red));
    while game.move_left() {}
    assert_eq!(game.active().x, 3);
}

#[test]
fn test_blocked_rotation_leaves_piece_unchanged() {
    let mut game = game_of(PieceKind::I);
    assert!(game.rotate());
    while game.move_right() {}
    assert_eq!(game.active().x, BOARD_WIDTH as i8 - 1);

    let before = *game.active();
    assert!(!game.rotate());
    assert_eq!(*game.active(), before);
}

#[test]
fn test_single_line_clear() {
    let mut game = game_of(PieceKind::I);
    fill_row_except(&mut game, 19, &[3, 4, 5, 6]);
    game.board_mut().set(0, 18, Some(Color::Green));

    let (outcome, _) = drop_to_rest(&mut game);
    assert_eq!(outcome, StepOutcome::Fixed { lines_cleared: 1 });
    assert_eq!(game.score(), 10);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.board().get(0, 19), Some(Some(Color::Green)));
    assert_eq!(game.board().filled_count(), 1);

    let names: Vec<&str> = game.drain_events().map(|e| e.name()).collect();
    assert_eq!(names, vec!["piece_fixed", "lines_cleared", "score_changed"]);
}

#[test]
fn test_four_line_clear_scores_eighty() {
    let mut game = game_of(PieceKind::I);
    for y in 16..20 {
        fill_row_except(&mut game, y, &[9]);
    }

    assert!(game.rotate());
    while game.move_right() {}
    let (outcome, _) = drop_to_rest(&mut game);

    assert_eq!(outcome, StepOutcome::Fixed { lines_cleared: 4 });
    assert_eq!(game.score(), 80);
    assert_eq!(game.lines(), 4);
    assert_eq!(game.board().filled_count(), 0);

    let cleared = game
        .drain_events()
        .find_map(|e| match e {
            GameEvent::LinesCleared { rows } => Some(rows),
            _ => None,
        })
        .unwrap();
    let ys: Vec<u8> = cleared.iter().map(|r| r.y).collect();
    assert_eq!(ys, vec![16, 17, 18, 19]);
}

#[test]
fn test_ten_lines_raise_the_level_and_speed() {
    let mut game = game_of(PieceKind::I);
    for _ in 0..10 {
        fill_row_except(&mut game, 19, &[3, 4, 5, 6]);
        drop_to_rest(&mut game);
    }

    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 100);
    assert!((game.fall_interval_ms() - 900.0).abs() < 1e-9);
    assert!(game
        .drain_events()
        .any(|e| matches!(e, GameEvent::LevelChanged { level: 2, .. })));
}

#[test]
fn test_fixing_into_top_row_ends_the_game() {
    let mut game = game_of(PieceKind::I);
    game.board_mut().set(4, 1, Some(Color::Red));

    assert_eq!(game.tick(), StepOutcome::Fixed { lines_cleared: 0 });
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.drain_events().any(|e| matches!(e, GameEvent::GameOver { .. })));

    // Nothing moves once the game is over.
    let before = game.snapshot();
    assert_eq!(game.tick(), StepOutcome::Ignored);
    assert_eq!(game.soft_drop(), StepOutcome::Ignored);
    assert!(!game.move_left());
    assert!(!game.rotate());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_reset_after_game_over() {
    let mut game = game_of(PieceKind::I);
    game.board_mut().set(4, 1, Some(Color::Red));
    game.tick();
    assert!(game.is_game_over());

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.fall_interval_ms(), 1000.0);
    assert_eq!(game.active().y, 0);
}

#[test]
fn test_soft_drop_matches_tick() {
    let mut by_tick = GameState::new(99);
    let mut by_drop = GameState::new(99);

    for _ in 0..200 {
        by_tick.tick();
        by_drop.apply_action(GameAction::SoftDrop);
    }
    assert_eq!(by_tick.snapshot(), by_drop.snapshot());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
    ];
    let mut a = GameState::new(7);
    let mut b = GameState::new(7);

    for step in 0..300 {
        let action = script[step % script.len()];
        a.apply_action(action);
        b.apply_action(action);
        a.tick();
        b.tick();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_board_never_keeps_a_full_row() {
    let mut game = GameState::new(2024);
    for _ in 0..2000 {
        game.tick();
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!game.board().is_row_full(y));
        }
        if game.is_game_over() {
            game.reset();
        }
    }
}
