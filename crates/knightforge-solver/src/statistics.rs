//! Search statistics.

use std::time::Duration;

/// Counters gathered during one solve.
///
/// # Example
///
/// ```
/// use knightforge_solver::SearchStatistics;
///
/// let mut stats = SearchStatistics::default();
/// stats.record_node(1);
/// stats.record_node(2);
/// stats.record_backtrack();
///
/// assert_eq!(stats.nodes_expanded, 2);
/// assert_eq!(stats.backtracks, 1);
/// assert_eq!(stats.max_depth, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes at which the deadline was polled.
    pub nodes_expanded: u64,
    /// Cells removed from the path after their candidates ran out.
    pub backtracks: u64,
    /// Longest path reached.
    pub max_depth: usize,
    /// Wall time of the solve as seen by its clock.
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Records a node expansion at the given path length.
    #[inline]
    pub fn record_node(&mut self, depth: usize) {
        self.nodes_expanded += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Returns nodes expanded per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }
}
