pub mod board;
pub mod geometry;
pub mod piece;
pub mod scoring;
pub mod state;

pub use board::{Board, Cell, create_empty_board};
pub use piece::{PieceColor, PieceType, Position, Tetromino, get_random_tetromino};
pub use state::{Game, GameState, Phase};
