use crate::common::Piece;

pub const BOARD_SIZE: usize = 8;

/// Occupied cells of a fresh board: `(row, col, piece)`.
pub const INITIAL_CELLS: [(usize, usize, Piece); 4] = [
    (3, 3, Piece::Second),
    (3, 4, Piece::First),
    (4, 3, Piece::First),
    (4, 4, Piece::Second),
];

/// The eight compass directions as `(row delta, column delta)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Frames a hub keeps for slow subscribers before they start lagging.
pub const DEFAULT_HUB_CAPACITY: usize = 64;
