//! One-call entry point that hides configuration and logging setup.

use knightforge_config::SolverConfig;
use knightforge_core::{Result, TourRequest};
use knightforge_solver::{SolveResult, TourSolver};

/// Configuration file read by [`solve_tour`] from the working directory.
pub const CONFIG_FILE: &str = "solver.toml";

/// Solves one request using `solver.toml` if present, defaults otherwise.
///
/// With the `console` feature the colored console is initialized first.
///
/// # Errors
///
/// Returns [`knightforge_core::TourError`] for invalid input.
pub fn solve_tour(request: &TourRequest) -> Result<SolveResult> {
    #[cfg(feature = "console")]
    crate::console::init();

    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    TourSolver::with_config(config).solve(request)
}
