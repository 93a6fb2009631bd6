//! Board geometry: dimensions, cells and the knight move set.

use std::fmt;

use crate::error::{Result, TourError};

/// Smallest supported board side.
pub const MIN_SIDE: usize = 1;

/// Largest supported board side.
pub const MAX_SIDE: usize = 40;

/// The 8 knight leaps as `(row, col)` offsets.
///
/// Neighbour enumeration always follows this order, so "move-set order"
/// is well defined wherever ties are kept stable.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A square on the board, 0-indexed.
///
/// A `Cell` carries no board; whether it is on a given board is answered by
/// [`Board::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a `(row, col)` offset, or `None` when it would go negative.
    #[inline]
    pub fn offset(self, (dr, dc): (isize, isize)) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }

    /// Returns true if `other` is exactly one knight leap away.
    #[inline]
    pub fn is_knight_move_to(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular board of `rows × cols` cells.
///
/// Both sides are guaranteed to lie in `MIN_SIDE..=MAX_SIDE`.
///
/// # Examples
///
/// ```
/// use knightforge_core::{Board, Cell};
///
/// let board = Board::new(3, 4).unwrap();
/// assert_eq!(board.cell_count(), 12);
///
/// let corner = Cell::new(0, 0);
/// let reachable: Vec<Cell> = board.knight_moves(corner).collect();
/// assert_eq!(reachable, vec![Cell::new(1, 2), Cell::new(2, 1)]);
///
/// assert!(Board::new(0, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board, rejecting sides outside `MIN_SIDE..=MAX_SIDE`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let side_ok = |side: usize| (MIN_SIDE..=MAX_SIDE).contains(&side);
        if side_ok(rows) && side_ok(cols) {
            Ok(Self { rows, cols })
        } else {
            Err(TourError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            })
        }
    }

    /// The standard 8×8 chessboard.
    pub const fn standard() -> Self {
        Self { rows: 8, cols: 8 }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, which is also the length of a full tour.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major index of an on-board cell.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {} is off the {} board", cell, self);
        cell.row * self.cols + cell.col
    }

    /// Inverse of [`Board::index`].
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(move |i| self.cell_at(i))
    }

    /// On-board cells one knight leap from `from`, in [`KNIGHT_MOVES`] order.
    pub fn knight_moves(&self, from: Cell) -> impl Iterator<Item = Cell> + '_ {
        KNIGHT_MOVES
            .iter()
            .filter_map(move |&offset| from.offset(offset))
            .filter(move |&to| self.contains(to))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
