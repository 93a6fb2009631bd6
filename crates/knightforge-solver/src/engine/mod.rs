//! Depth-first backtracking over knight moves.
//!
//! The search keeps an explicit stack of [`Frame`]s instead of recursing,
//! so a 40x40 board (1600 levels) never touches the thread stack limit.
//!
//! At every node the termination condition is polled first, then the path
//! length is compared with the cell count. Otherwise the node's candidates
//! are tried in order: each is marked and appended, and the search descends.
//! A node whose candidates run out is unmarked and popped, handing control
//! back to its parent. Timeout and success end the whole search at once.

mod frame;

use knightforge_core::{Board, Cell};
use rand::Rng;
use tracing::{debug, trace};

use crate::board_state::BoardState;
use crate::ordering::MoveOrdering;
use crate::statistics::SearchStatistics;
use crate::termination::Termination;

use frame::Frame;

#[cfg(test)]
mod tests;

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The path covers the board.
    Found,
    /// Every branch from the start was exhausted.
    NotFound,
    /// Termination fired before either of the above.
    TimedOut,
}

/// Everything a finished search leaves behind.
///
/// `path` and `state` agree: on `Found` and `TimedOut` the state marks
/// exactly the path, on `NotFound` both are empty.
#[derive(Debug)]
pub struct SearchRun {
    pub status: SearchStatus,
    pub path: Vec<Cell>,
    pub state: BoardState,
    pub statistics: SearchStatistics,
}

/// Runs one search with a given ordering and termination condition.
#[derive(Debug)]
pub struct BacktrackingEngine<'a, O, T> {
    ordering: &'a O,
    termination: &'a T,
}

impl<'a, O, T> BacktrackingEngine<'a, O, T>
where
    O: MoveOrdering,
    T: Termination,
{
    pub fn new(ordering: &'a O, termination: &'a T) -> Self {
        Self {
            ordering,
            termination,
        }
    }

    /// Searches for a tour of `board` from `start`.
    ///
    /// `start` must be on the board.
    pub fn run<R: Rng + ?Sized>(&self, board: Board, start: Cell, rng: &mut R) -> SearchRun {
        let cell_count = board.cell_count();
        let mut state = BoardState::new(board);
        let mut path = Vec::with_capacity(cell_count);
        let mut stack: Vec<Frame> = Vec::with_capacity(cell_count);
        let mut statistics = SearchStatistics::default();

        state.mark(start, 1);
        path.push(start);

        let status = 'search: loop {
            let depth = path.len();
            statistics.record_node(depth);

            if self.termination.is_terminated() {
                debug!(
                    event = "timed_out",
                    depth = depth as u64,
                    nodes = statistics.nodes_expanded,
                );
                break SearchStatus::TimedOut;
            }
            if depth == cell_count {
                break SearchStatus::Found;
            }

            let cell = path[depth - 1];
            let candidates = self.ordering.candidates(cell, &state, rng);
            stack.push(Frame::new(cell, candidates));

            // Find the next candidate to descend into, backtracking as needed.
            loop {
                let Some(frame) = stack.last_mut() else {
                    debug!(
                        event = "exhausted",
                        nodes = statistics.nodes_expanded,
                        backtracks = statistics.backtracks,
                    );
                    break 'search SearchStatus::NotFound;
                };

                if let Some(next) = frame.next_candidate() {
                    state.mark(next, path.len() as u32 + 1);
                    path.push(next);
                    continue 'search;
                }

                let exhausted = frame.cell;
                stack.pop();
                let popped = path.pop();
                debug_assert_eq!(popped, Some(exhausted));
                state.unmark(exhausted);
                statistics.record_backtrack();
                trace!(
                    event = "backtrack",
                    row = exhausted.row as u64,
                    col = exhausted.col as u64,
                    depth = path.len() as u64,
                );
            }
        };

        SearchRun {
            status,
            path,
            state,
            statistics,
        }
    }
}
