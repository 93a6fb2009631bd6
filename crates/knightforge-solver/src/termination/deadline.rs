//! Wall-clock budget for one solve.

use std::time::{Duration, Instant};

use knightforge_core::{positive_time_limit, DEFAULT_TIME_LIMIT_SECS};

use super::{Clock, Termination};

/// A positive time budget.
///
/// Non-positive or non-finite input is replaced by the 10 second default.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use knightforge_solver::termination::TimeBudget;
///
/// assert_eq!(TimeBudget::from_secs_f64(0.5).as_duration(), Duration::from_millis(500));
/// assert_eq!(TimeBudget::from_secs_f64(-1.0), TimeBudget::default());
/// assert_eq!(TimeBudget::default().as_duration(), Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget(Duration);

impl TimeBudget {
    pub fn from_secs_f64(secs: f64) -> Self {
        positive_time_limit(secs).map(Self).unwrap_or_default()
    }

    pub fn from_duration(limit: Duration) -> Self {
        if limit.is_zero() {
            Self::default()
        } else {
            Self(limit)
        }
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self(Duration::from_secs_f64(DEFAULT_TIME_LIMIT_SECS))
    }
}

/// Expires once `budget` has passed on `clock` since [`Deadline::start`].
///
/// A budget that reaches past the clock's representable range never
/// expires. Querying has no effect beyond a clock read.
#[derive(Debug)]
pub struct Deadline<'c, C: Clock + ?Sized> {
    clock: &'c C,
    started: Instant,
    deadline: Option<Instant>,
    budget: TimeBudget,
}

impl<'c, C: Clock + ?Sized> Deadline<'c, C> {
    /// Starts the budget at the clock's current reading.
    pub fn start(clock: &'c C, budget: TimeBudget) -> Self {
        let started = clock.now();
        let deadline = started.checked_add(budget.as_duration());
        Self {
            clock,
            started,
            deadline,
            budget,
        }
    }

    /// Returns true once the budget is used up.
    #[inline]
    pub fn expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| self.clock.now() >= deadline)
    }

    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    /// Time since the deadline started.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }
}

impl<C: Clock + ?Sized> Termination for Deadline<'_, C> {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.expired()
    }
}
