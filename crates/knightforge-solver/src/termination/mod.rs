//! Cooperative termination for a running search.
//!
//! The engine polls its [`Termination`] once per node expansion. The
//! production condition is a wall-clock [`Deadline`], which reads time
//! through an injectable [`Clock`].

mod clock;
mod deadline;

use std::fmt::Debug;

pub use clock::{Clock, ManualClock, SystemClock};
pub use deadline::{Deadline, TimeBudget};

/// Trait for determining when to stop searching.
pub trait Termination: Debug {
    /// Returns true if the search should stop now.
    fn is_terminated(&self) -> bool;
}
