//! The knight's tour returned by a successful search.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Board, Cell};

/// An ordered sequence of cells on a board, each a knight leap from the last.
///
/// The solver only hands out complete tours: `len() == board.cell_count()`,
/// the first cell is the requested start and no cell repeats. [`Tour::is_valid`]
/// rechecks all of that from scratch.
///
/// # Examples
///
/// ```
/// use knightforge_core::{Board, Cell, Tour};
///
/// let board = Board::new(1, 1).unwrap();
/// let tour = Tour::new(board, vec![Cell::new(0, 0)]);
/// assert!(tour.is_valid());
/// assert_eq!(tour.visit_order_grid(), vec![vec![1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    board: Board,
    cells: Vec<Cell>,
}

impl Tour {
    /// Wraps a path. No validation is performed here.
    pub fn new(board: Board, cells: Vec<Cell>) -> Self {
        Self { board, cells }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Returns true if every cell of the board is visited.
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.board.cell_count()
    }

    /// Returns true if the tour is complete and its last cell attacks the first.
    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(first), Some(last)) if self.cells.len() > 1 => {
                self.is_complete() && last.is_knight_move_to(first)
            }
            _ => false,
        }
    }

    /// Consecutive `(from, to)` pairs, for step-by-step playback.
    pub fn moves(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Checks completeness, bounds, distinctness and knight adjacency.
    pub fn is_valid(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        if !self.cells.iter().all(|&c| self.board.contains(c)) {
            return false;
        }
        let distinct: HashSet<Cell> = self.cells.iter().copied().collect();
        if distinct.len() != self.cells.len() {
            return false;
        }
        self.moves().all(|(from, to)| from.is_knight_move_to(to))
    }

    /// Move numbers laid out by row: `grid[row][col]` is the 1-based step at
    /// which that cell is visited, 0 for cells the tour never reaches.
    pub fn visit_order_grid(&self) -> Vec<Vec<u32>> {
        let mut grid = vec![vec![0u32; self.board.cols()]; self.board.rows()];
        for (step, cell) in self.cells.iter().enumerate() {
            if self.board.contains(*cell) {
                grid[cell.row][cell.col] = step as u32 + 1;
            }
        }
        grid
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.board.cell_count().to_string().len();
        for row in self.visit_order_grid() {
            let line: Vec<String> = row
                .iter()
                .map(|&step| format!("{:>width$}", step, width = width))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
