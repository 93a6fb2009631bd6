//! Per-cell visit tracking for one search.

use knightforge_core::{Board, Cell};

/// Flat visit-order table: 0 is unvisited, `k > 0` means visited at step `k`.
///
/// During a search the visited cells are exactly the current path and carry
/// the orders `1..=path.len()`. [`BoardState::mark`] and
/// [`BoardState::unmark`] are exact inverses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    order: Vec<u32>,
    visited: usize,
}

impl BoardState {
    /// Creates a state with every cell unvisited.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            order: vec![0; board.cell_count()],
            visited: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Records that `cell` is visited at step `order`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is already visited or `order` is 0.
    pub fn mark(&mut self, cell: Cell, order: u32) {
        assert!(order > 0, "visit order must be positive, got 0 for {}", cell);
        let slot = &mut self.order[self.board.index(cell)];
        assert!(
            *slot == 0,
            "cell {} already visited at step {}",
            cell,
            *slot
        );
        *slot = order;
        self.visited += 1;
    }

    /// Resets `cell` to unvisited.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not visited.
    pub fn unmark(&mut self, cell: Cell) {
        let slot = &mut self.order[self.board.index(cell)];
        assert!(*slot != 0, "cell {} is not visited", cell);
        *slot = 0;
        self.visited -= 1;
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visit_order(cell) != 0
    }

    /// The 1-based step at which `cell` was visited, or 0.
    #[inline]
    pub fn visit_order(&self, cell: Cell) -> u32 {
        self.order[self.board.index(cell)]
    }

    /// Number of cells currently visited.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Unvisited on-board cells one knight leap from `cell`.
    pub fn degree(&self, cell: Cell) -> usize {
        self.board
            .knight_moves(cell)
            .filter(|&to| !self.is_visited(to))
            .count()
    }
}
