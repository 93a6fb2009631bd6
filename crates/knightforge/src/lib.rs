//! KnightForge - A Knight's-Tour Solver in Rust
//!
//! Describe the board and start cell, call [`solve_tour`], and get back a
//! tour, proof that none exists, or a timeout.
//!
//! # Example
//!
//! ```rust
//! use knightforge::prelude::*;
//!
//! let solver = TourSolver::with_config(SolverConfig::new().with_random_seed(0));
//! let result = solver.solve(&TourRequest::new(5, 5, 0, 0)).unwrap();
//!
//! let tour = result.tour().unwrap();
//! assert_eq!(tour.start(), Some(Cell::new(0, 0)));
//! assert!(tour.is_valid());
//! ```

pub use knightforge_core::{
    positive_time_limit, Board, Cell, Tour, TourError, TourRequest, DEFAULT_TIME_LIMIT_SECS,
    KNIGHT_MOVES, MAX_SIDE, MIN_SIDE,
};

pub use knightforge_config::{
    ConfigError, EnvironmentMode, MoveOrderingType, SolverConfig, TerminationConfig,
};

pub use knightforge_solver::{
    solve_batch, SearchStatistics, SolveEvent, SolveOutcome, SolveResult, SolverManager,
    TourSolver,
};

// Lower-level search building blocks
pub use knightforge_solver::{engine, ordering, termination, BoardState};

/// Receiving end of [`SolverManager::solve`].
pub type SolveReceiver = tokio::sync::mpsc::UnboundedReceiver<SolveEvent>;

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{solve_tour, CONFIG_FILE};

pub mod prelude {
    pub use super::{Board, Cell, Tour, TourError, TourRequest};
    pub use super::{EnvironmentMode, MoveOrderingType, SolverConfig};
    pub use super::{solve_batch, solve_tour, SolveOutcome, SolveResult, SolverManager, TourSolver};
}
