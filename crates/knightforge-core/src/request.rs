//! Raw solver input as supplied by a caller.

use std::time::Duration;

use crate::board::{Board, Cell};
use crate::error::{Result, TourError};

/// Budget used when no positive time limit is supplied anywhere.
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 10.0;

/// Converts a seconds value into a budget, or `None` unless it is positive and finite.
///
/// Values too large for a `Duration` saturate to `Duration::MAX`.
///
/// ```
/// use std::time::Duration;
/// use knightforge_core::positive_time_limit;
///
/// assert_eq!(positive_time_limit(2.5), Some(Duration::from_millis(2500)));
/// assert_eq!(positive_time_limit(0.0), None);
/// assert_eq!(positive_time_limit(-1.0), None);
/// assert_eq!(positive_time_limit(f64::NAN), None);
/// assert_eq!(positive_time_limit(1e20), Some(Duration::MAX));
/// ```
pub fn positive_time_limit(secs: f64) -> Option<Duration> {
    if secs > 0.0 && secs.is_finite() {
        Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    } else {
        None
    }
}

/// One solve request: board size, start cell and an optional time budget.
///
/// Fields are signed so that whatever the caller typed (including negative
/// coordinates) can be represented and rejected by [`TourRequest::validate`]
/// rather than silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourRequest {
    pub rows: i64,
    pub cols: i64,
    pub start_row: i64,
    pub start_col: i64,
    /// Seconds; non-positive or absent falls back to configuration, then to
    /// [`DEFAULT_TIME_LIMIT_SECS`].
    pub time_limit_secs: Option<f64>,
}

impl TourRequest {
    pub fn new(rows: i64, cols: i64, start_row: i64, start_col: i64) -> Self {
        Self {
            rows,
            cols,
            start_row,
            start_col,
            time_limit_secs: None,
        }
    }

    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// The requested budget, if it is usable.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.and_then(positive_time_limit)
    }

    /// Validates dimensions and start cell.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidDimensions`] if either side is outside 1..=40,
    /// [`TourError::StartOutOfBounds`] if the start is not on the board.
    pub fn validate(&self) -> Result<(Board, Cell)> {
        let invalid_dimensions = || TourError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        let rows = usize::try_from(self.rows).map_err(|_| invalid_dimensions())?;
        let cols = usize::try_from(self.cols).map_err(|_| invalid_dimensions())?;
        let board = Board::new(rows, cols).map_err(|_| invalid_dimensions())?;

        let out_of_bounds = || TourError::StartOutOfBounds {
            row: self.start_row,
            col: self.start_col,
            rows,
            cols,
        };
        let row = usize::try_from(self.start_row).map_err(|_| out_of_bounds())?;
        let col = usize::try_from(self.start_col).map_err(|_| out_of_bounds())?;
        let start = Cell::new(row, col);
        if !board.contains(start) {
            return Err(out_of_bounds());
        }

        Ok((board, start))
    }
}
