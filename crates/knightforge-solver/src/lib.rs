//! KnightForge Solver - Warnsdorff-ordered backtracking search
//!
//! This crate finds knight's tours:
//! - [`BoardState`] tracks which cells the current path visits
//! - [`ordering`] ranks onward moves (Warnsdorff's heuristic)
//! - [`engine`] runs the explicit-stack depth-first search
//! - [`termination`] supplies the wall-clock deadline and clocks
//! - [`TourSolver`] ties them together behind one call
//! - [`SolverManager`] and [`solve_batch`] run many solves at once

pub mod board_state;
pub mod engine;
pub mod manager;
pub mod ordering;
pub mod result;
pub mod solver;
pub mod statistics;
pub mod termination;


pub use board_state::BoardState;
pub use engine::{BacktrackingEngine, SearchRun, SearchStatus};
pub use manager::{solve_batch, JobId, SolveEvent, SolverManager};
pub use ordering::{AnyOrdering, Candidates, MoveOrdering, MoveSetOrder, Warnsdorff, WarnsdorffStable};
pub use result::{SolveOutcome, SolveResult};
pub use solver::TourSolver;
pub use statistics::SearchStatistics;
pub use termination::{Clock, Deadline, ManualClock, SystemClock, Termination, TimeBudget};
