//! Time sources for deadlines.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A test clock that only moves when told to.
///
/// Every call to [`Clock::now`] returns the current reading and then
/// advances it by `tick`, so a search that polls once per node sees time
/// grow with the number of nodes expanded.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use knightforge_solver::termination::{Clock, ManualClock};
///
/// let clock = ManualClock::ticking(Duration::from_millis(1));
/// let first = clock.now();
/// let second = clock.now();
/// assert_eq!(second - first, Duration::from_millis(1));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    tick_nanos: u64,
    elapsed_nanos: AtomicU64,
}

impl ManualClock {
    /// A clock that never moves on its own.
    pub fn frozen() -> Self {
        Self::ticking(Duration::ZERO)
    }

    /// A clock that advances by `tick` on every read.
    pub fn ticking(tick: Duration) -> Self {
        Self {
            origin: Instant::now(),
            tick_nanos: duration_nanos(tick),
            elapsed_nanos: AtomicU64::new(0),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.elapsed_nanos
            .fetch_add(duration_nanos(by), Ordering::Relaxed);
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::Relaxed))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let elapsed = self
            .elapsed_nanos
            .fetch_add(self.tick_nanos, Ordering::Relaxed);
        self.origin + Duration::from_nanos(elapsed)
    }
}

fn duration_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
