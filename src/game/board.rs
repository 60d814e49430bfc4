use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::PieceColor;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceColor),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<PieceColor> {
        match *self {
            Cell::Filled(color) => Some(color),
            Cell::Empty => None,
        }
    }
}

pub type Row = [Cell; BOARD_WIDTH];
pub type Board = [Row; BOARD_HEIGHT];

pub fn create_empty_board() -> Board {
    [empty_row(); BOARD_HEIGHT]
}

pub fn empty_row() -> Row {
    [Cell::Empty; BOARD_WIDTH]
}

pub fn is_row_full(row: &Row) -> bool {
    row.iter().all(Cell::is_filled)
}
