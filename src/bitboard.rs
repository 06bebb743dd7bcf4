//! Fixed-size occupancy sets packed into an unsigned integer.
//!
//! A `BitBoard<T, N>` holds one bit per cell of an `N×N` grid, row-major,
//! so an 8×8 Reversi board fits exactly into a `u64`. The type is
//! `no_std` friendly and never allocates.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "position ({}, {}) is outside the board", row, col)
            }
        }
    }
}

impl core::error::Error for BitBoardError {}

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == T::zero().count_zeros() as usize {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row >= N || col >= N {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }

    /// An empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (row, col) is in the set. Out-of-range cells never are.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match Self::bit(row, col) {
            Ok(bit) => !(self.bits & bit).is_zero(),
            Err(_) => false,
        }
    }

    /// Adds (row, col) to the set.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(row, col)?;
        Ok(())
    }

    /// Removes (row, col) from the set.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits & !Self::bit(row, col)?;
        Ok(())
    }

    /// Builds a set from `(row, col)` pairs.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (row, col) in cells {
            board.insert(row, col)?;
        }
        Ok(board)
    }

    /// Cells in the set, in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let c = if self.contains(row, col) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            if row + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Row-major iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
