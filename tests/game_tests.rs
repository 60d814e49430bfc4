//! End-to-end games driven through the public API with explicit time.

use std::time::{Duration, Instant};

use falltris::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use falltris::game::{Cell, Game, GameState, PieceColor, PieceType, Tetromino};
use falltris::input::{apply_command, Command};
use falltris::storage::{HighScoreStore, MemoryStore};

/// Spawns `piece_type`, slides it so its bounding box starts at `column`, and hard drops it.
fn drop_at(game: &mut Game, piece_type: PieceType, column: i32, now: Instant) {
    game.next_piece = Some(Tetromino::new(piece_type));
    game.update(now);
    assert_eq!(game.current_piece.as_ref().map(|p| p.piece_type), Some(piece_type));

    while game.move_piece(-1, 0) {}
    for _ in 0..column {
        assert!(game.move_piece(1, 0));
    }
    assert!(game.hard_drop());
}

#[test]
fn filling_the_bottom_row_clears_one_line() {
    let now = Instant::now();
    let mut game = Game::with_seed(11, 0);
    game.start(now);

    drop_at(&mut game, PieceType::I, 0, now);
    drop_at(&mut game, PieceType::I, 4, now);
    assert_eq!(game.score, 0);
    assert_eq!(game.lines_cleared, 0);

    let level = game.level;
    drop_at(&mut game, PieceType::O, 8, now);

    assert_eq!(game.lines_cleared, 1);
    assert_eq!(game.score, 100 * level);
    // The top half of the O shifted down into the bottom row
    let bottom = &game.board[BOARD_HEIGHT - 1];
    assert_eq!(bottom[8], Cell::Filled(PieceColor::Yellow));
    assert_eq!(bottom[9], Cell::Filled(PieceColor::Yellow));
    assert_eq!(bottom.iter().filter(|c| c.is_filled()).count(), 2);
}

#[test]
fn four_vertical_rows_score_a_tetris_and_level_up() {
    let now = Instant::now();
    let mut game = Game::with_seed(11, 0);
    game.start(now);
    game.lines_cleared = 9;
    game.level = 1;

    // Leave column 9 open, then fill it with a vertical I
    for y in BOARD_HEIGHT - 4..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH - 1 {
            game.board[y][x] = Cell::Filled(PieceColor::Blue);
        }
    }

    game.next_piece = Some(Tetromino::new(PieceType::I));
    game.update(now);
    assert!(game.rotate_piece());
    while game.move_piece(1, 0) {}
    assert!(game.hard_drop());

    assert_eq!(game.score, 800);
    assert_eq!(game.lines_cleared, 13);
    assert_eq!(game.level, 2);
    assert!(game.board.iter().flatten().all(|c| !c.is_filled()));
}

#[test]
fn stacking_to_the_top_ends_the_game_and_persists_high_score() {
    let t0 = Instant::now();
    let mut store = MemoryStore { high_score: 50 };
    let mut game = Game::with_seed(21, store.load().unwrap());
    apply_command(&mut game, Command::Start, t0);
    game.score = 75;

    let mut now = t0;
    let mut spawned = 0;
    while game.game_state == GameState::Playing && spawned < 200 {
        game.update(now);
        if game.current_piece.is_some() {
            spawned += 1;
            apply_command(&mut game, Command::HardDrop, now);
        }
        now += Duration::from_millis(16);

        if let Some(score) = game.take_new_high_score() {
            store.save(score).unwrap();
        }
    }

    assert_eq!(game.game_state, GameState::GameOver);
    assert_eq!(store.high_score, 75);
    assert_eq!(game.high_score, 75);

    // Restart keeps the high score and clears the board
    apply_command(&mut game, Command::Restart, now);
    assert_eq!(game.game_state, GameState::Playing);
    assert_eq!(game.high_score, 75);
    assert_eq!(game.score, 0);
}

#[test]
fn gravity_alone_eventually_locks_a_piece() {
    let t0 = Instant::now();
    let mut game = Game::with_seed(4, 0);
    game.start(t0);
    game.next_piece = Some(Tetromino::new(PieceType::O));
    game.update(t0);

    // O falls 18 rows, then the 19th tick locks it
    for step in 1..=19 {
        game.update(t0 + Duration::from_millis(1000 * step));
    }
    assert!(game.current_piece.is_none());
    assert_eq!(game.board[BOARD_HEIGHT - 1][4], Cell::Filled(PieceColor::Yellow));
    assert_eq!(game.board[BOARD_HEIGHT - 2][5], Cell::Filled(PieceColor::Yellow));
}
