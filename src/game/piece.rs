use rand::Rng;

use crate::constants::BOARD_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    I, O, T, S, Z, J, L
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T,
        PieceType::S, PieceType::Z, PieceType::J, PieceType::L,
    ];
}

/// Semantic color tag. Front ends decide what each one looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

pub type Shape = Vec<Vec<bool>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tetromino {
    pub piece_type: PieceType,
    pub shape: Shape,
    pub color: PieceColor,
    pub position: Position,
}

// Spawn orientations, row-major, 1 = filled
const I_SHAPE: &[&[u8]] = &[
    &[0, 0, 0, 0],
    &[1, 1, 1, 1],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
];
const O_SHAPE: &[&[u8]] = &[
    &[1, 1],
    &[1, 1],
];
const T_SHAPE: &[&[u8]] = &[
    &[0, 1, 0],
    &[1, 1, 1],
    &[0, 0, 0],
];
const S_SHAPE: &[&[u8]] = &[
    &[0, 1, 1],
    &[1, 1, 0],
    &[0, 0, 0],
];
const Z_SHAPE: &[&[u8]] = &[
    &[1, 1, 0],
    &[0, 1, 1],
    &[0, 0, 0],
];
const J_SHAPE: &[&[u8]] = &[
    &[1, 0, 0],
    &[1, 1, 1],
    &[0, 0, 0],
];
const L_SHAPE: &[&[u8]] = &[
    &[0, 0, 1],
    &[1, 1, 1],
    &[0, 0, 0],
];

fn catalog(piece_type: PieceType) -> (&'static [&'static [u8]], PieceColor) {
    match piece_type {
        PieceType::I => (I_SHAPE, PieceColor::Cyan),
        PieceType::O => (O_SHAPE, PieceColor::Yellow),
        PieceType::T => (T_SHAPE, PieceColor::Purple),
        PieceType::S => (S_SHAPE, PieceColor::Green),
        PieceType::Z => (Z_SHAPE, PieceColor::Red),
        PieceType::J => (J_SHAPE, PieceColor::Blue),
        PieceType::L => (L_SHAPE, PieceColor::Orange),
    }
}

impl Tetromino {
    /// The shape is a fresh allocation, so pieces never alias each other.
    pub fn new(piece_type: PieceType) -> Self {
        let (rows, color) = catalog(piece_type);
        let shape: Shape = rows
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect();
        let shape_width = shape[0].len() as i32;

        Self {
            piece_type,
            shape,
            color,
            position: Position {
                x: BOARD_WIDTH as i32 / 2 - shape_width / 2,
                y: 0,
            },
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let piece_type = PieceType::ALL[rng.gen_range(0..PieceType::ALL.len())];
        Self::new(piece_type)
    }

    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..self.clone() }
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut moved = self.clone();
        moved.position.x += dx;
        moved.position.y += dy;
        moved
    }

    pub fn blocks_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let origin_x = self.position.x + dx;
        let origin_y = self.position.y + dy;
        self.shape.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(j, _)| (origin_x + j as i32, origin_y + i as i32))
        })
    }

    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.blocks_at(0, 0)
    }
}

pub fn get_random_tetromino<R: Rng>(rng: &mut R) -> Tetromino {
    Tetromino::random(rng)
}
