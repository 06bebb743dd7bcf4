//! Common types for Reversi: pieces, cells, positions, outcomes and errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two players' discs. `First` is Black and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    First,
    Second,
}

impl Piece {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Piece::First => Piece::Second,
            Piece::Second => Piece::First,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::First => write!(f, "first (black)"),
            Piece::Second => write!(f, "second (white)"),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    First,
    Second,
}

impl Cell {
    /// The piece occupying this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(Piece::First),
            Cell::Second => Some(Piece::Second),
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::First => Cell::First,
            Piece::Second => Cell::Second,
        }
    }
}

/// A board coordinate. Sequences of positions are always row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Position { row, column }
    }
}

/// Final outcome of a game; `None` while it is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    #[default]
    None,
    FirstWins,
    SecondWins,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::None => write!(f, "no winner yet"),
            Winner::FirstWins => write!(f, "first (black) wins"),
            Winner::SecondWins => write!(f, "second (white) wins"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 8×8 grid.
    OutOfBounds(BitBoardError),
    /// Target cell already holds a piece.
    CellOccupied,
    /// Placement would not flip any opposing piece.
    NoCaptureAvailable,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::OutOfBounds(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(e) => write!(f, "{}", e),
            BoardError::CellOccupied => write!(f, "cell is not empty"),
            BoardError::NoCaptureAvailable => write!(f, "placement does not flip any piece"),
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors returned by Game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has finished; no further moves are accepted.
    GameOver(Winner),
    /// Submitted piece is not the one to move.
    WrongTurn { expected: Piece, got: Piece },
    /// Position is not among the current legal moves.
    IllegalMove(Position),
    /// The board refused the placement.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver(winner) => write!(f, "game is over: {}", winner),
            GameError::WrongTurn { expected, got } => {
                write!(f, "not your turn: {} to move, got {}", expected, got)
            }
            GameError::IllegalMove(pos) => {
                write!(f, "invalid placement at ({}, {})", pos.row, pos.column)
            }
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

impl core::error::Error for GameError {}
