//! Pure board/piece geometry: rotation, collision, merging and line clears.
//!
//! Nothing here mutates its inputs; callers get new values back.

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::board::{Board, Cell, empty_row, is_row_full};
use crate::game::piece::{Shape, Tetromino};

pub fn rotate_shape(shape: &Shape) -> Shape {
    let size = shape.len();
    let mut rotated = vec![vec![false; size]; size];

    for i in 0..size {
        for j in 0..size {
            rotated[j][size - 1 - i] = shape[i][j];
        }
    }

    rotated
}

pub fn rotate_tetromino(piece: &Tetromino) -> Shape {
    rotate_shape(&piece.shape)
}

/// True if `piece` moved by `(dx, dy)` leaves the board sideways, sinks
/// below the floor, or overlaps a filled cell. Rows above the board only
/// enforce the side walls.
pub fn check_collision(board: &Board, piece: &Tetromino, dx: i32, dy: i32) -> bool {
    piece.blocks_at(dx, dy).any(|(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return true;
        }
        y >= 0 && board[y as usize][x as usize].is_filled()
    })
}

pub fn merge_tetromino(board: &Board, piece: &Tetromino) -> Board {
    let mut merged = *board;
    for (x, y) in piece.blocks() {
        if y >= 0 && y < BOARD_HEIGHT as i32 && x >= 0 && x < BOARD_WIDTH as i32 {
            merged[y as usize][x as usize] = Cell::Filled(piece.color);
        }
    }
    merged
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    pub lines_cleared: u32,
}

/// Drops every full row and refills the top with empty rows.
pub fn clear_lines(board: &Board) -> LineClear {
    let mut cleared = [empty_row(); BOARD_HEIGHT];
    let mut lines_cleared = 0;
    let mut write_row = BOARD_HEIGHT;

    // Walk bottom-up, copying rows that survive into the next free slot
    for row in board.iter().rev() {
        if is_row_full(row) {
            lines_cleared += 1;
        } else {
            write_row -= 1;
            cleared[write_row] = *row;
        }
    }

    LineClear { board: cleared, lines_cleared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_empty_board;
    use crate::game::piece::{PieceColor, PieceType};

    fn fill_row(board: &mut Board, y: usize) {
        board[y] = [Cell::Filled(PieceColor::Blue); BOARD_WIDTH];
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for piece_type in PieceType::ALL {
            let piece = Tetromino::new(piece_type);
            let mut shape = piece.shape.clone();
            for _ in 0..4 {
                shape = rotate_shape(&shape);
            }
            assert_eq!(shape, piece.shape, "{:?}", piece_type);
        }
    }

    #[test]
    fn rotating_t_points_it_right() {
        let rotated = rotate_tetromino(&Tetromino::new(PieceType::T));
        assert_eq!(rotated, vec![
            vec![false, true, false],
            vec![false, true, true],
            vec![false, true, false],
        ]);
    }

    #[test]
    fn i_piece_can_fall_from_spawn() {
        let board = create_empty_board();
        let piece = Tetromino::new(PieceType::I);
        assert!(!check_collision(&board, &piece, 0, 0));
        assert!(!check_collision(&board, &piece, 0, 1));
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = create_empty_board();
        for piece_type in PieceType::ALL {
            let piece = Tetromino::new(piece_type);
            let min_x = piece.blocks().map(|(x, _)| x).min().unwrap();
            let max_x = piece.blocks().map(|(x, _)| x).max().unwrap();
            let max_y = piece.blocks().map(|(_, y)| y).max().unwrap();

            assert!(check_collision(&board, &piece, -min_x - 1, 0), "{:?} left", piece_type);
            assert!(!check_collision(&board, &piece, -min_x, 0), "{:?} left edge", piece_type);
            assert!(check_collision(&board, &piece, BOARD_WIDTH as i32 - max_x, 0), "{:?} right", piece_type);
            assert!(check_collision(&board, &piece, 0, BOARD_HEIGHT as i32 - max_y), "{:?} floor", piece_type);
            assert!(!check_collision(&board, &piece, 0, BOARD_HEIGHT as i32 - max_y - 1), "{:?} last row", piece_type);
        }
    }

    #[test]
    fn cells_above_board_ignore_content_but_not_walls() {
        let mut board = create_empty_board();
        fill_row(&mut board, 0);
        let piece = Tetromino::new(PieceType::O);

        // Entirely above the board: no content collision
        assert!(!check_collision(&board, &piece, 0, -2));
        // Overlapping row 0
        assert!(check_collision(&board, &piece, 0, -1));
        // Above the board but past the left wall
        assert!(check_collision(&board, &piece, -5, -2));
    }

    #[test]
    fn filled_cells_block_movement() {
        let mut board = create_empty_board();
        board[2][4] = Cell::Filled(PieceColor::Red);
        let piece = Tetromino::new(PieceType::O);
        assert!(!check_collision(&board, &piece, 0, 0));
        assert!(check_collision(&board, &piece, 0, 1));
    }

    #[test]
    fn merge_leaves_input_untouched() {
        let board = create_empty_board();
        let snapshot = board;
        let piece = Tetromino::new(PieceType::T).shifted(0, 5);

        let merged = merge_tetromino(&board, &piece);

        assert_eq!(board, snapshot);
        assert_eq!(merged[5][5], Cell::Filled(PieceColor::Purple));
        assert_eq!(merged[6][4], Cell::Filled(PieceColor::Purple));
        assert_eq!(merged[6][5], Cell::Filled(PieceColor::Purple));
        assert_eq!(merged[6][6], Cell::Filled(PieceColor::Purple));
        let filled = merged.iter().flatten().filter(|c| c.is_filled()).count();
        assert_eq!(filled, 4);
    }

    #[test]
    fn merge_drops_cells_above_the_board() {
        let board = create_empty_board();
        let piece = Tetromino::new(PieceType::T).shifted(0, -1);
        let merged = merge_tetromino(&board, &piece);
        let filled = merged.iter().flatten().filter(|c| c.is_filled()).count();
        assert_eq!(filled, 3);
    }

    #[test]
    fn clear_without_full_rows_is_identity() {
        let mut board = create_empty_board();
        board[19][0] = Cell::Filled(PieceColor::Green);
        board[10][3] = Cell::Filled(PieceColor::Red);

        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, 0);
        assert_eq!(result.board, board);
    }

    #[test]
    fn clear_all_full_rows_empties_board() {
        let mut board = create_empty_board();
        for y in 0..BOARD_HEIGHT {
            fill_row(&mut board, y);
        }

        let result = clear_lines(&board);
        assert_eq!(result.lines_cleared, BOARD_HEIGHT as u32);
        assert_eq!(result.board, create_empty_board());
    }

    #[test]
    fn clear_compacts_remaining_rows_in_order() {
        let mut board = create_empty_board();
        board[15][0] = Cell::Filled(PieceColor::Cyan);
        fill_row(&mut board, 16);
        board[17][1] = Cell::Filled(PieceColor::Yellow);
        fill_row(&mut board, 18);
        board[19][2] = Cell::Filled(PieceColor::Orange);

        let result = clear_lines(&board);

        assert_eq!(result.lines_cleared, 2);
        assert_eq!(result.board[17][0], Cell::Filled(PieceColor::Cyan));
        assert_eq!(result.board[18][1], Cell::Filled(PieceColor::Yellow));
        assert_eq!(result.board[19][2], Cell::Filled(PieceColor::Orange));
        assert!(result.board[..17].iter().flatten().all(|c| !c.is_filled()));
    }
}
