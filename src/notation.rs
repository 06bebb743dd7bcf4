//! Algebraic move notation: column letter `a`-`h`, row digit `1`-`8`.
//!
//! `f5` is row 4, column 5. Records are either compact (`f5d6c5`) or
//! whitespace separated (`f5 d6 c5`).

use crate::common::{GameError, Position};
use crate::config::BOARD_SIZE;
use crate::game::Game;
use alloc::vec::Vec;
use core::fmt;

/// Errors from reading move notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationError {
    /// Column letter outside `a`-`h`.
    BadColumn(char),
    /// Row digit outside `1`-`8`.
    BadRow(char),
    /// A move was cut short.
    Truncated,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::BadColumn(c) => write!(f, "bad column {:?}, expected a-h", c),
            NotationError::BadRow(c) => write!(f, "bad row {:?}, expected 1-8", c),
            NotationError::Truncated => write!(f, "move record ends mid-move"),
        }
    }
}

impl core::error::Error for NotationError {}

/// Errors from replaying a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    Notation(NotationError),
    /// The move at `index` (0-based) was rejected.
    Move {
        index: usize,
        position: Position,
        error: GameError,
    },
}

impl From<NotationError> for RecordError {
    fn from(err: NotationError) -> Self {
        RecordError::Notation(err)
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Notation(e) => write!(f, "{}", e),
            RecordError::Move {
                index,
                position,
                error,
            } => write!(f, "move {} ({}): {}", index + 1, position, error),
        }
    }
}

impl core::error::Error for RecordError {}

fn column(c: char) -> Result<usize, NotationError> {
    match c.to_ascii_lowercase() {
        l @ 'a'..='h' => Ok(l as usize - 'a' as usize),
        _ => Err(NotationError::BadColumn(c)),
    }
}

fn row(c: char) -> Result<usize, NotationError> {
    match c {
        '1'..='8' => Ok(c as usize - '1' as usize),
        _ => Err(NotationError::BadRow(c)),
    }
}

/// Parse a single move such as `f5`.
pub fn parse_move(s: &str) -> Result<Position, NotationError> {
    let mut chars = s.trim().chars();
    let (Some(c), Some(r)) = (chars.next(), chars.next()) else {
        return Err(NotationError::Truncated);
    };
    if let Some(extra) = chars.next() {
        return Err(NotationError::BadRow(extra));
    }
    Ok(Position::new(row(r)?, column(c)?))
}

/// Parse a whole record, compact or whitespace separated.
pub fn parse_record(s: &str) -> Result<Vec<Position>, NotationError> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    chars
        .chunks(2)
        .map(|pair| match pair {
            [c, r] => Ok(Position::new(row(*r)?, column(*c)?)),
            _ => Err(NotationError::Truncated),
        })
        .collect()
}

/// Play a record from a fresh game. Each move is made by whichever piece
/// is to move, so passes need no marker in the record.
pub fn replay(record: &str) -> Result<Game, RecordError> {
    let mut game = Game::new();
    for (index, position) in parse_record(record)?.into_iter().enumerate() {
        game.put_piece(position.row, position.column, game.next_piece())
            .map_err(|error| RecordError::Move {
                index,
                position,
                error,
            })?;
    }
    Ok(game)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row < BOARD_SIZE && self.column < BOARD_SIZE {
            write!(f, "{}{}", (b'a' + self.column as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.column)
        }
    }
}
