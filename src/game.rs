use crate::{
    board::{Board, BoardState},
    common::{GameError, Piece, Position, Winner},
};
use alloc::vec::Vec;
use log::{debug, info};

/// Serializable snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub next_piece: Piece,
    pub next_moves: Vec<Position>,
    pub winner: Winner,
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this piece to move.
    InProgress(Piece),
    /// Neither side can move; the game is decided.
    Finished(Winner),
}

/// A Reversi game: the board, whose turn it is and the legal moves for
/// that turn.
///
/// `next_moves` is recomputed from the board after every move, never
/// patched. Once `winner` is set the game is finished and every further
/// move is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next_piece: Piece,
    next_moves: Vec<Position>,
    winner: Winner,
}

impl Game {
    /// A fresh game with First to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Piece::First)
    }

    /// Resume play on `board` with `next_piece` to move. Passes and game
    /// over are resolved exactly as after a move.
    pub fn from_board(board: Board, next_piece: Piece) -> Self {
        let mut game = Game {
            board,
            next_piece,
            next_moves: Vec::new(),
            winner: Winner::None,
        };
        game.advance(next_piece);
        game
    }

    /// Restore a game from a snapshot. Cached moves and winner are derived
    /// again from the board rather than trusted.
    pub fn from_state(state: GameState) -> Self {
        Self::from_board(Board::from(state.board), state.next_piece)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            next_piece: self.next_piece,
            next_moves: self.next_moves.clone(),
            winner: self.winner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_piece(&self) -> Piece {
        self.next_piece
    }

    /// Legal moves for the piece to move, row-major. Empty once finished.
    pub fn next_moves(&self) -> &[Position] {
        &self.next_moves
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner != Winner::None
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Finished(self.winner)
        } else {
            GameStatus::InProgress(self.next_piece)
        }
    }

    /// Play `piece` at (row, col).
    ///
    /// Rejects the move when the game is over, when it is not `piece`'s
    /// turn, or when (row, col) is not a legal move. A rejected move leaves
    /// the game untouched.
    pub fn put_piece(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.winner));
        }
        if piece != self.next_piece {
            return Err(GameError::WrongTurn {
                expected: self.next_piece,
                got: piece,
            });
        }
        let pos = Position::new(row, col);
        if !self.next_moves.contains(&pos) {
            return Err(GameError::IllegalMove(pos));
        }
        let flips = self.board.put_piece(row, col, piece)?;
        debug!("{} played ({}, {}), flipped {}", piece, row, col, flips.len());
        self.advance(piece.opponent());
        Ok(())
    }

    /// Hand the turn to `candidate`, passing back to the other side when
    /// `candidate` has no move and ending the game when neither has.
    fn advance(&mut self, candidate: Piece) {
        self.next_piece = candidate;
        self.next_moves = self.board.get_next_moves(candidate);
        if !self.next_moves.is_empty() {
            return;
        }
        let other = candidate.opponent();
        let moves = self.board.get_next_moves(other);
        if !moves.is_empty() {
            debug!("{} has no legal move, {} plays again", candidate, other);
            self.next_piece = other;
            self.next_moves = moves;
            return;
        }
        self.winner = self.board.winner();
        info!(
            "game over: {} ({} to {})",
            self.winner,
            self.board.count(Piece::First),
            self.board.count(Piece::Second)
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
