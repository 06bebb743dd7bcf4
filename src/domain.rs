//! Wire-facing types: the game payload, move requests and piece codes.

use crate::{Cell, Game, Piece, Position, Winner, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a client needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub next_piece: Piece,
    pub next_moves: Vec<Position>,
    pub winner: Winner,
}

impl From<&Game> for GamePayload {
    fn from(game: &Game) -> Self {
        GamePayload {
            board: game.board().cells(),
            next_piece: game.next_piece(),
            next_moves: game.next_moves().to_vec(),
            winner: game.winner(),
        }
    }
}

/// A move as submitted by a client. Coordinates are signed so that any
/// JSON integer decodes; out-of-range values are rejected as illegal moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutPieceRequest {
    pub row: i64,
    pub column: i64,
    pub piece: String,
}

impl PutPieceRequest {
    pub fn new(row: i64, column: i64, piece: Piece) -> Self {
        PutPieceRequest {
            row,
            column,
            piece: piece_code(piece).to_string(),
        }
    }
}

/// Unrecognized piece code in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceCodeError {
    Unknown(String),
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::Unknown(code) => {
                write!(f, "invalid piece {:?}, expected \"B\" or \"W\"", code)
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}

/// `"B"` is First (black), `"W"` is Second (white).
pub fn parse_piece_code(code: &str) -> Result<Piece, PieceCodeError> {
    match code {
        "B" => Ok(Piece::First),
        "W" => Ok(Piece::Second),
        other => Err(PieceCodeError::Unknown(other.to_string())),
    }
}

pub fn piece_code(piece: Piece) -> &'static str {
    match piece {
        Piece::First => "B",
        Piece::Second => "W",
    }
}

/// Kind tag carried by every broadcast frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Game,
}

/// A frame sent through the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub payload: GamePayload,
}

impl Envelope {
    pub fn game(payload: GamePayload) -> Self {
        Envelope {
            kind: MessageKind::Game,
            payload,
        }
    }

    /// JSON encoding of the frame.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
