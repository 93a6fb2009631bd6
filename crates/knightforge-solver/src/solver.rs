//! The top-level knight's-tour solver.

use knightforge_config::SolverConfig;
use knightforge_core::{Board, Cell, Result, Tour, TourRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::engine::{BacktrackingEngine, SearchStatus};
use crate::ordering::AnyOrdering;
use crate::result::{SolveOutcome, SolveResult};
use crate::termination::{Clock, Deadline, SystemClock, TimeBudget};

/// Finds knight's tours.
///
/// Each call to a `solve*` method builds fresh search state, so one solver
/// can be shared across threads and calls.
///
/// # Example
///
/// ```
/// use knightforge_core::TourRequest;
/// use knightforge_solver::{SolveOutcome, TourSolver};
///
/// let solver = TourSolver::new();
/// let result = solver.solve_with_seed(&TourRequest::new(5, 5, 0, 0), 42).unwrap();
///
/// match result.outcome {
///     SolveOutcome::Found(tour) => assert_eq!(tour.len(), 25),
///     other => panic!("unexpected outcome {other}"),
/// }
///
/// assert!(solver.solve(&TourRequest::new(0, 5, 0, 0)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSolver {
    config: SolverConfig,
}

impl TourSolver {
    /// A solver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves with the configured seed, or an OS seed when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`knightforge_core::TourError`] for invalid dimensions or an
    /// off-board start. No search is attempted in that case.
    pub fn solve(&self, request: &TourRequest) -> Result<SolveResult> {
        let mut rng = match self.config.effective_seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.solve_with(request, &mut rng, &SystemClock)
    }

    /// Solves with an explicit tie-breaking seed.
    pub fn solve_with_seed(&self, request: &TourRequest, seed: u64) -> Result<SolveResult> {
        self.solve_with(request, &mut ChaCha8Rng::seed_from_u64(seed), &SystemClock)
    }

    /// Solves with an injected RNG and clock.
    pub fn solve_with<R, C>(&self, request: &TourRequest, rng: &mut R, clock: &C) -> Result<SolveResult>
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let (board, start) = request.validate()?;
        let budget = TimeBudget::from_duration(self.config.resolve_time_limit(request.time_limit()));
        Ok(self.search(board, start, budget, rng, clock))
    }

    fn search<R, C>(
        &self,
        board: Board,
        start: Cell,
        budget: TimeBudget,
        rng: &mut R,
        clock: &C,
    ) -> SolveResult
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        info!(
            event = "solve_start",
            rows = board.rows() as u64,
            cols = board.cols() as u64,
            start_row = start.row as u64,
            start_col = start.col as u64,
            time_limit_ms = u64::try_from(budget.as_duration().as_millis()).unwrap_or(u64::MAX),
            "Solving started"
        );

        let ordering = AnyOrdering::from(self.config.move_ordering);
        let deadline = Deadline::start(clock, budget);
        let run = BacktrackingEngine::new(&ordering, &deadline).run(board, start, rng);

        let mut statistics = run.statistics;
        statistics.elapsed = deadline.elapsed();

        let outcome = match run.status {
            SearchStatus::Found => SolveOutcome::Found(Tour::new(board, run.path)),
            SearchStatus::NotFound => SolveOutcome::NotFound,
            SearchStatus::TimedOut => SolveOutcome::TimedOut,
        };

        info!(
            event = "solve_end",
            outcome = outcome.label(),
            nodes = statistics.nodes_expanded,
            backtracks = statistics.backtracks,
            max_depth = statistics.max_depth as u64,
            duration_ms = statistics.elapsed.as_millis() as u64,
            nodes_per_sec = statistics.nodes_per_second(),
            "Solving ended"
        );

        SolveResult {
            outcome,
            statistics,
        }
    }
}
