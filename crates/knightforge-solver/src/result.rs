//! What a solve hands back.

use std::fmt;

use knightforge_core::Tour;

use crate::statistics::SearchStatistics;

/// Terminal outcome of a valid solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A complete tour from the requested start.
    Found(Tour),
    /// The search space was exhausted: no tour exists from this start.
    NotFound,
    /// The budget ran out first; whether a tour exists is unknown.
    TimedOut,
}

impl SolveOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }

    pub fn tour(&self) -> Option<&Tour> {
        match self {
            SolveOutcome::Found(tour) => Some(tour),
            _ => None,
        }
    }

    pub fn into_tour(self) -> Option<Tour> {
        match self {
            SolveOutcome::Found(tour) => Some(tour),
            _ => None,
        }
    }

    /// Short name used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            SolveOutcome::Found(_) => "found",
            SolveOutcome::NotFound => "not_found",
            SolveOutcome::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome plus the statistics of the search that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub outcome: SolveOutcome,
    pub statistics: SearchStatistics,
}

impl SolveResult {
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.outcome.tour()
    }

    pub fn into_tour(self) -> Option<Tour> {
        self.outcome.into_tour()
    }
}
