use std::time::Instant;
use rand::{rngs::StdRng, SeedableRng};

use crate::constants::WALL_KICKS;
use crate::game::board::{Board, create_empty_board};
use crate::game::geometry::{
    LineClear, check_collision, clear_lines, merge_tetromino, rotate_tetromino,
};
use crate::game::piece::Tetromino;
use crate::game::scoring::{calculate_level, calculate_score, drop_interval};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Where a running game is between locking one piece and showing the next.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Falling,
    // A piece just locked; the next tick spawns its successor
    Spawning,
}

pub struct Game {
    pub board: Board,
    pub current_piece: Option<Tetromino>,
    pub next_piece: Option<Tetromino>,
    pub game_state: GameState,
    pub phase: Phase,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub high_score: u32,
    // Set when the game that just ended beat the previous best
    pub new_high_score: bool,
    pub drop_timer: Instant,
    pending_high_score: Option<u32>,
    rng: StdRng,
}

impl Game {
    pub fn new(high_score: u32) -> Self {
        Self::with_rng(StdRng::from_entropy(), high_score)
    }

    pub fn with_seed(seed: u64, high_score: u32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), high_score)
    }

    fn with_rng(rng: StdRng, high_score: u32) -> Self {
        Self {
            board: create_empty_board(),
            current_piece: None,
            next_piece: None,
            game_state: GameState::Idle,
            phase: Phase::Spawning,
            score: 0,
            lines_cleared: 0,
            level: 1,
            high_score,
            new_high_score: false,
            drop_timer: Instant::now(),
            pending_high_score: None,
            rng,
        }
    }

    /// Starts a fresh game from any state. The high score carries over.
    pub fn start(&mut self, now: Instant) {
        self.board = create_empty_board();
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 1;
        self.new_high_score = false;
        self.current_piece = None;
        self.next_piece = Some(Tetromino::random(&mut self.rng));
        self.game_state = GameState::Playing;
        self.phase = Phase::Spawning;
        self.drop_timer = now;
    }

    pub fn restart(&mut self, now: Instant) {
        self.start(now);
    }

    fn spawn_piece(&mut self, now: Instant) {
        let piece = match self.next_piece.take() {
            Some(piece) => piece,
            None => Tetromino::random(&mut self.rng),
        };

        if check_collision(&self.board, &piece, 0, 0) {
            // Leave the piece that did not fit in the preview
            self.next_piece = Some(piece);
            self.end_game();
            return;
        }

        self.current_piece = Some(piece);
        self.next_piece = Some(Tetromino::random(&mut self.rng));
        self.phase = Phase::Falling;
        self.drop_timer = now;
    }

    fn end_game(&mut self) {
        self.game_state = GameState::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
            self.pending_high_score = Some(self.score);
        }
    }

    /// Hands a newly reached high score to whoever persists it, once.
    pub fn take_new_high_score(&mut self) -> Option<u32> {
        self.pending_high_score.take()
    }

    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        let Some(piece) = self.current_piece.take() else {
            return false;
        };

        if !check_collision(&self.board, &piece, dx, dy) {
            self.current_piece = Some(piece.shifted(dx, dy));
            return true;
        }

        if dy > 0 {
            self.lock_piece(piece);
        } else {
            self.current_piece = Some(piece);
        }
        false
    }

    pub fn rotate_piece(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        let Some(ref piece) = self.current_piece else {
            return false;
        };
        let rotated = piece.with_shape(rotate_tetromino(piece));

        if !check_collision(&self.board, &rotated, 0, 0) {
            self.current_piece = Some(rotated);
            return true;
        }

        for kick in WALL_KICKS {
            if !check_collision(&self.board, &rotated, kick, 0) {
                self.current_piece = Some(rotated.shifted(kick, 0));
                return true;
            }
        }
        false
    }

    /// Lowest legal row for the current piece, as an offset from where it is.
    pub fn drop_distance(&self) -> Option<i32> {
        let piece = self.current_piece.as_ref()?;
        let mut distance = 0;
        while !check_collision(&self.board, piece, 0, distance + 1) {
            distance += 1;
        }
        Some(distance)
    }

    pub fn hard_drop(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        let Some(distance) = self.drop_distance() else {
            return false;
        };
        if let Some(piece) = self.current_piece.take() {
            self.lock_piece(piece.shifted(0, distance));
        }
        true
    }

    fn lock_piece(&mut self, piece: Tetromino) {
        let merged = merge_tetromino(&self.board, &piece);
        let LineClear { board, lines_cleared } = clear_lines(&merged);
        self.board = board;

        if lines_cleared > 0 {
            self.score = self.score.saturating_add(calculate_score(lines_cleared, self.level));
            self.lines_cleared += lines_cleared;
            self.level = calculate_level(self.lines_cleared);
        }

        self.current_piece = None;
        self.phase = Phase::Spawning;
    }

    pub fn pause(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        self.game_state = GameState::Paused;
        true
    }

    pub fn resume(&mut self, now: Instant) -> bool {
        if self.game_state != GameState::Paused {
            return false;
        }
        self.game_state = GameState::Playing;
        // Time spent paused does not count toward the next drop
        self.drop_timer = now;
        true
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.game_state {
            GameState::Playing => {
                self.pause();
            }
            GameState::Paused => {
                self.resume(now);
            }
            _ => {}
        }
    }

    /// Advances the game to `now`. Call once per frame.
    pub fn update(&mut self, now: Instant) {
        if self.game_state != GameState::Playing {
            return;
        }

        if self.phase == Phase::Spawning {
            self.spawn_piece(now);
            return;
        }

        if now.saturating_duration_since(self.drop_timer) >= drop_interval(self.level) {
            self.move_piece(0, 1);
            self.drop_timer = now;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }
}
