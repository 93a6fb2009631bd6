//! One level of the explicit search stack.

use knightforge_core::Cell;

use crate::ordering::Candidates;

/// A cell on the current path with the candidates still to try from it.
#[derive(Debug)]
pub(crate) struct Frame {
    pub(crate) cell: Cell,
    candidates: Candidates,
    next: usize,
}

impl Frame {
    pub(crate) fn new(cell: Cell, candidates: Candidates) -> Self {
        Self {
            cell,
            candidates,
            next: 0,
        }
    }

    /// Takes the next untried candidate.
    #[inline]
    pub(crate) fn next_candidate(&mut self) -> Option<Cell> {
        let cell = self.candidates.get(self.next).copied()?;
        self.next += 1;
        Some(cell)
    }
}
