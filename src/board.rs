//! Board state and the capture-and-place algorithm for a single move.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Piece, Position, Winner};
use crate::config::{BOARD_SIZE, DIRECTIONS, INITIAL_CELLS};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

type BB = BitBoard<u64, BOARD_SIZE>;

/// Plain 8×8 grid view of a board, used for snapshots and payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct BoardState {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// An 8×8 Reversi board. Each player's discs are kept in their own
/// bitboard; the two sets never overlap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    first: BB,
    second: BB,
}

impl Board {
    /// The standard starting position: two discs of each color crossed in
    /// the center.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (row, col, piece) in INITIAL_CELLS {
            board.set_cell(row, col, piece);
        }
        board
    }

    fn empty() -> Self {
        Board {
            first: BB::new(),
            second: BB::new(),
        }
    }

    // Callers pass cells they already bounds-checked or took from the grid.
    fn set_cell(&mut self, row: usize, col: usize, piece: Piece) {
        debug_assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "set_cell({}, {}) off the board",
            row,
            col
        );
        let placed = self
            .pieces_mut(piece.opponent())
            .remove(row, col)
            .and_then(|()| self.pieces_mut(piece).insert(row, col));
        debug_assert!(placed.is_ok(), "{:?}", placed);
    }

    fn pieces(&self, piece: Piece) -> &BB {
        match piece {
            Piece::First => &self.first,
            Piece::Second => &self.second,
        }
    }

    fn pieces_mut(&mut self, piece: Piece) -> &mut BB {
        match piece {
            Piece::First => &mut self.first,
            Piece::Second => &mut self.second,
        }
    }

    fn occupied(&self) -> BB {
        self.first | self.second
    }

    /// The cell at (row, col), or `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            None
        } else if self.first.contains(row, col) {
            Some(Cell::First)
        } else if self.second.contains(row, col) {
            Some(Cell::Second)
        } else {
            Some(Cell::Empty)
        }
    }

    /// All cells as a row-major grid.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, col) in self.first.iter() {
            cells[row][col] = Cell::First;
        }
        for (row, col) in self.second.iter() {
            cells[row][col] = Cell::Second;
        }
        cells
    }

    /// Number of discs `piece` has on the board.
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces(piece).count_ones()
    }

    pub fn empty_count(&self) -> usize {
        (!self.occupied()).count_ones()
    }

    /// Outcome by disc count. Only meaningful once neither side can move.
    pub fn winner(&self) -> Winner {
        let first = self.count(Piece::First);
        let second = self.count(Piece::Second);
        match first.cmp(&second) {
            core::cmp::Ordering::Greater => Winner::FirstWins,
            core::cmp::Ordering::Less => Winner::SecondWins,
            core::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// Opponent discs bracketed from (row, col) along one direction.
    fn flips_in_direction(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        piece: Piece,
    ) -> Vec<Position> {
        let own = self.pieces(piece);
        let theirs = self.pieces(piece.opponent());
        let mut run = Vec::new();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..BOARD_SIZE as isize).contains(&r) && (0..BOARD_SIZE as isize).contains(&c) {
            let (ru, cu) = (r as usize, c as usize);
            if own.contains(ru, cu) {
                return run;
            }
            if !theirs.contains(ru, cu) {
                return Vec::new();
            }
            run.push(Position::new(ru, cu));
            r += dr;
            c += dc;
        }
        // walked off the board without closing the run
        Vec::new()
    }

    /// Every disc that placing `piece` at (row, col) would flip. Empty when
    /// the target is occupied or outside the board.
    pub fn flips(&self, row: usize, col: usize, piece: Piece) -> Vec<Position> {
        if self.cell(row, col) != Some(Cell::Empty) {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .flat_map(|&dir| self.flips_in_direction(row, col, dir, piece))
            .collect()
    }

    /// Legal moves for `piece` in row-major order.
    pub fn get_next_moves(&self, piece: Piece) -> Vec<Position> {
        (!self.occupied())
            .iter()
            .filter(|&(row, col)| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| !self.flips_in_direction(row, col, dir, piece).is_empty())
            })
            .map(Position::from)
            .collect()
    }

    /// Place `piece` at (row, col), flipping every captured disc.
    ///
    /// All checks run before the board is touched, so on error the board
    /// is unchanged. Returns the flipped positions.
    pub fn put_piece(
        &mut self,
        row: usize,
        col: usize,
        piece: Piece,
    ) -> Result<Vec<Position>, BoardError> {
        let target = BB::from_cells([(row, col)])?;
        if !(self.occupied() & target).is_empty() {
            return Err(BoardError::CellOccupied);
        }
        let flips = self.flips(row, col, piece);
        if flips.is_empty() {
            return Err(BoardError::NoCaptureAvailable);
        }
        for pos in &flips {
            self.set_cell(pos.row, pos.column, piece);
        }
        self.set_cell(row, col, piece);
        Ok(flips)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells().iter().enumerate() {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::First => 'B',
                    Cell::Second => 'W',
                };
                write!(f, "{}", c)?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

/// Errors from parsing a board diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    /// Diagram did not contain exactly 64 cells.
    WrongCellCount(usize),
    /// A character other than `.`, `B` or `W`.
    UnknownCell(char),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongCellCount(n) => {
                write!(f, "expected {} cells, found {}", BOARD_SIZE * BOARD_SIZE, n)
            }
            BoardParseError::UnknownCell(c) => write!(f, "unknown cell character {:?}", c),
        }
    }
}

impl core::error::Error for BoardParseError {}

/// Reads the diagram produced by `Display`; whitespace is ignored.
/// Parsed boards may hold any layout, not only reachable ones.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = BoardState::default().cells;
        let mut n = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                '.' => Cell::Empty,
                'B' | 'b' => Cell::First,
                'W' | 'w' => Cell::Second,
                other => return Err(BoardParseError::UnknownCell(other)),
            };
            if n < BOARD_SIZE * BOARD_SIZE {
                cells[n / BOARD_SIZE][n % BOARD_SIZE] = cell;
            }
            n += 1;
        }
        if n != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::WrongCellCount(n));
        }
        Ok(Board::from(BoardState { cells }))
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells() }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        let mut board = Board::empty();
        for (row, cells) in state.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(piece) = cell.piece() {
                    board.set_cell(row, col, piece);
                }
            }
        }
        board
    }
}

