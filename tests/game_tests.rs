//! Game tests - commands, gravity, scoring, lifecycle

use gridfall::core::{line_clear_points, score_for_clear, Board, Game, PieceGenerator};
use gridfall::types::{GameCommand, GamePhase, PieceKind};

fn game_with(kinds: &[PieceKind]) -> Game {
    Game::with_generator(PieceGenerator::sequence(kinds.to_vec()))
}

/// Board with `rows` filled except the given open column
fn board_with_gap(filled_rows: std::ops::Range<i8>, open_column: i8) -> Board {
    let mut board = Board::standard();
    for y in filled_rows {
        for x in 0..board.columns() as i8 {
            if x != open_column {
                board.set(x, y, Some(PieceKind::L));
            }
        }
    }
    board
}

#[test]
fn test_initial_state() {
    let game = Game::new(1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines_cleared(), 0);
    assert_eq!(game.fall_interval_ms(), 500);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_gravity_respects_interval() {
    let mut game = game_with(&[PieceKind::O]);
    game.tick(0); // arms the timer
    let y0 = game.active().y;

    game.tick(499);
    assert_eq!(game.active().y, y0);
    game.tick(500); // exactly the interval: strictly-greater comparison
    assert_eq!(game.active().y, y0);
    game.tick(501);
    assert_eq!(game.active().y, y0 + 1);
}

#[test]
fn test_soft_drop_moves_one_row() {
    let mut game = game_with(&[PieceKind::T]);
    let y0 = game.active().y;
    game.soft_drop();
    assert_eq!(game.active().y, y0 + 1);
}

#[test]
fn test_horizontal_moves_revert_at_walls() {
    let mut game = game_with(&[PieceKind::O]);
    for _ in 0..20 {
        game.move_left();
    }
    assert_eq!(game.active().x, 0);
    for _ in 0..20 {
        game.move_right();
    }
    assert_eq!(game.active().x, 8); // O's 2-wide box against the right wall
}

#[test]
fn test_rotation_succeeds_in_open_field() {
    let mut game = game_with(&[PieceKind::T]);
    game.rotate();
    assert_eq!(game.active().rotation_index, 1);
    game.rotate();
    game.rotate();
    game.rotate();
    assert_eq!(game.active().rotation_index, 0);
}

#[test]
fn test_rotation_fully_undone_at_right_wall() {
    let mut game = game_with(&[PieceKind::I]);
    game.rotate(); // vertical
    for _ in 0..20 {
        game.move_right();
    }
    let before = *game.active();
    assert_eq!(before.x, 9);

    // Horizontal I fits at neither x=9, x=8, nor x=10: full undo
    game.rotate();
    assert_eq!(*game.active(), before);
}

#[test]
fn test_hard_drop_promotes_next_piece() {
    let mut game = game_with(&[PieceKind::I, PieceKind::O, PieceKind::T]);
    assert_eq!(game.active().kind, PieceKind::I);
    assert_eq!(game.next_piece().kind, PieceKind::O);

    game.hard_drop();
    assert_eq!(game.active().kind, PieceKind::O);
    assert_eq!(game.next_piece().kind, PieceKind::T);
    // Flat I rests on the floor
    assert_eq!(game.board().get(3, 19), Some(Some(PieceKind::I)));
}

#[test]
fn test_tetris_scores_800_at_level_1() {
    let board = board_with_gap(16..20, 0);
    let mut game = Game::with_board(board, PieceGenerator::sequence(vec![PieceKind::I]));

    game.rotate(); // vertical
    for _ in 0..3 {
        game.move_left();
    }
    assert_eq!(game.active().x, 0);
    game.hard_drop();

    assert_eq!(game.lines_cleared(), 4);
    assert_eq!(game.score(), 800);
    assert_eq!(game.level(), 1);
    assert_eq!(game.fall_interval_ms(), 500);
}

#[test]
fn test_five_lines_in_one_event_scores_500() {
    // Row 19 is complete before the drop; the vertical I completes rows
    // 15..=18, so one lock clears five rows at once.
    let mut board = board_with_gap(15..19, 0);
    for x in 0..10 {
        board.set(x, 19, Some(PieceKind::L));
    }
    let mut game = Game::with_board(board, PieceGenerator::sequence(vec![PieceKind::I]));

    game.rotate();
    for _ in 0..3 {
        game.move_left();
    }
    game.hard_drop();

    assert_eq!(game.lines_cleared(), 5);
    assert_eq!(game.score(), 500); // fallback 100 x 5, at level 1
}

#[test]
fn test_line_totals_drive_level_and_speed() {
    // Ten almost-complete rows, open at the rightmost column; three
    // vertical I drops clear 4 + 4 + 2 lines.
    let board = board_with_gap(10..20, 9);
    let mut game = Game::with_board(board, PieceGenerator::sequence(vec![PieceKind::I]));

    for _ in 0..3 {
        game.rotate();
        for _ in 0..6 {
            game.move_right();
        }
        assert_eq!(game.active().x, 9);
        game.hard_drop();
    }

    assert_eq!(game.lines_cleared(), 10);
    // 800 + 800 + 300, each scored at the level in effect before the clear
    assert_eq!(game.score(), 1900);
    assert_eq!(game.level(), 2);
    assert_eq!(game.fall_interval_ms(), 450);
}

#[test]
fn test_scoring_lookup() {
    assert_eq!(line_clear_points(1), 100);
    assert_eq!(line_clear_points(2), 300);
    assert_eq!(line_clear_points(3), 500);
    assert_eq!(line_clear_points(4), 800);
    assert_eq!(line_clear_points(5), 500);
    assert_eq!(score_for_clear(4, 3), 2400);
    assert_eq!(score_for_clear(2, 2), 600);
}

#[test]
fn test_repeated_o_drops_terminate_within_bound() {
    let mut game = game_with(&[PieceKind::O]);
    let bound = (10 * 20) / 4; // every piece covers four cells

    let mut drops = 0;
    while !game.is_over() {
        game.hard_drop();
        drops += 1;
        assert!(drops <= bound, "game must end within {} drops", bound);
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
}

#[test]
fn test_game_over_is_absorbing() {
    let mut game = game_with(&[PieceKind::O]);
    while !game.is_over() {
        game.hard_drop();
    }

    let before = game.snapshot();
    game.tick(u64::MAX);
    game.move_left();
    game.move_right();
    game.rotate();
    game.soft_drop();
    game.hard_drop();
    game.toggle_pause();
    assert_eq!(game.snapshot(), before);
    assert!(game.is_over());
    assert!(!game.is_paused());
}

#[test]
fn test_restart_after_game_over() {
    let mut game = game_with(&[PieceKind::O]);
    while !game.is_over() {
        game.hard_drop();
    }

    game.restart();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert!(!game.is_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.lines_cleared(), 0);
    assert!(game.snapshot().board.iter().all(|&cell| cell == 0));
}

#[test]
fn test_pause_blocks_gravity_and_commands() {
    let mut game = game_with(&[PieceKind::T]);
    game.tick(0);
    game.toggle_pause();
    assert_eq!(game.phase(), GamePhase::Paused);

    let before = *game.active();
    game.tick(1_000_000);
    game.move_left();
    game.rotate();
    game.hard_drop();
    assert_eq!(*game.active(), before);

    game.toggle_pause();
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_restart_works_from_pause() {
    let mut game = game_with(&[PieceKind::T]);
    game.toggle_pause();
    game.apply(GameCommand::Restart);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert!(!game.is_paused());
}

#[test]
fn test_command_dispatch_matches_methods() {
    let mut by_method = game_with(&[PieceKind::J]);
    let mut by_command = game_with(&[PieceKind::J]);

    by_method.move_right();
    by_method.rotate();
    by_method.soft_drop();

    by_command.apply(GameCommand::MoveRight);
    by_command.apply(GameCommand::Rotate);
    by_command.apply(GameCommand::SoftDrop);

    assert_eq!(by_method.snapshot(), by_command.snapshot());
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut board = Board::standard();
    for x in 0..10 {
        board.set(x, 1, Some(PieceKind::S));
    }
    let game = Game::with_board(board, PieceGenerator::sequence(vec![PieceKind::O]));
    assert!(game.is_over());
}
