//! Running many independent solves.
//!
//! [`SolverManager`] runs each request on its own worker thread and reports
//! back over a channel. [`solve_batch`] fans a slice of requests out over
//! the rayon pool. Every solve owns its own board state, deadline and RNG.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use knightforge_config::SolverConfig;
use knightforge_core::{Result, TourRequest};
use rayon::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::result::SolveResult;
use crate::solver::TourSolver;

/// Identifies one submitted solve.
pub type JobId = u64;

/// The single message sent for each submitted job.
#[derive(Debug)]
pub struct SolveEvent {
    pub job_id: JobId,
    pub result: Result<SolveResult>,
}

/// Submits solves to background threads.
///
/// # Example
///
/// ```
/// use knightforge_config::SolverConfig;
/// use knightforge_core::TourRequest;
/// use knightforge_solver::SolverManager;
///
/// let manager = SolverManager::new(SolverConfig::new().with_random_seed(1));
/// let mut receiver = manager.solve(TourRequest::new(8, 8, 0, 0));
///
/// let event = receiver.blocking_recv().unwrap();
/// assert!(event.result.unwrap().is_found());
/// ```
#[derive(Debug, Default)]
pub struct SolverManager {
    solver: TourSolver,
    next_job: AtomicU64,
}

impl SolverManager {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            solver: TourSolver::with_config(config),
            next_job: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        self.solver.config()
    }

    /// Starts solving `request` on a new thread.
    ///
    /// The returned receiver yields exactly one [`SolveEvent`]. Use
    /// `recv().await` inside a runtime or `blocking_recv()` outside one.
    pub fn solve(&self, request: TourRequest) -> mpsc::UnboundedReceiver<SolveEvent> {
        let job_id = self.next_job.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();
        let solver = self.solver.clone();

        info!(event = "job_submitted", job_id, rows = request.rows, cols = request.cols);
        thread::spawn(move || {
            let result = solver.solve(&request);
            if sender.send(SolveEvent { job_id, result }).is_err() {
                debug!(event = "job_dropped", job_id);
            }
        });

        receiver
    }

    /// Solves a batch in parallel; see [`solve_batch`].
    pub fn solve_batch(&self, requests: &[TourRequest]) -> Vec<Result<SolveResult>> {
        solve_batch(self.config(), requests)
    }
}

/// Solves independent requests in parallel on the rayon pool.
///
/// Results come back in input order. With a configured seed `s`, request
/// `i` is solved with seed `s + i`, so a batch is reproducible as a whole.
pub fn solve_batch(config: &SolverConfig, requests: &[TourRequest]) -> Vec<Result<SolveResult>> {
    let solver = TourSolver::with_config(config.clone());
    let base_seed = config.effective_seed();

    info!(event = "batch_start", requests = requests.len() as u64);
    requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| match base_seed {
            Some(seed) => solver.solve_with_seed(request, seed.wrapping_add(index as u64)),
            None => solver.solve(request),
        })
        .collect()
}
