//! Start positions with known outcomes.
//!
//! Every `UNSOLVABLE` case is small enough to exhaust in well under a
//! second. `SOLVABLE` cases are found quickly by Warnsdorff ordering.

use knightforge_core::{Board, Cell};

/// A board and start cell whose answer is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCase {
    pub rows: usize,
    pub cols: usize,
    pub start_row: usize,
    pub start_col: usize,
}

impl KnownCase {
    pub const fn new(rows: usize, cols: usize, start_row: usize, start_col: usize) -> Self {
        Self {
            rows,
            cols,
            start_row,
            start_col,
        }
    }

    /// # Panics
    ///
    /// Panics if the fixture's dimensions are out of range.
    pub fn board(&self) -> Board {
        Board::new(self.rows, self.cols).expect("fixture board in range")
    }

    pub fn start(&self) -> Cell {
        Cell::new(self.start_row, self.start_col)
    }
}

/// Cases with at least one tour.
pub const SOLVABLE: &[KnownCase] = &[
    KnownCase::new(1, 1, 0, 0),
    KnownCase::new(3, 4, 0, 0),
    KnownCase::new(5, 5, 0, 0),
    KnownCase::new(5, 5, 2, 2),
    KnownCase::new(8, 8, 0, 0),
    KnownCase::new(8, 8, 3, 5),
];

/// Cases with no tour at all.
pub const UNSOLVABLE: &[KnownCase] = &[
    KnownCase::new(1, 2, 0, 0),
    KnownCase::new(1, 3, 0, 0),
    KnownCase::new(1, 8, 0, 4),
    KnownCase::new(2, 5, 0, 0),
    KnownCase::new(3, 3, 0, 0),
    KnownCase::new(3, 3, 1, 1),
    KnownCase::new(3, 4, 0, 1),
    KnownCase::new(4, 4, 0, 0),
    KnownCase::new(4, 4, 1, 1),
];
