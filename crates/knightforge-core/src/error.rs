//! Error types for KnightForge

use thiserror::Error;

use crate::board::{MAX_SIDE, MIN_SIDE};

/// Input rejected before any search starts.
///
/// These are caller mistakes and are always recoverable by correcting the
/// request. A search that finds no tour is not an error; see
/// `SolveOutcome::NotFound` in the solver crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// Board dimensions outside the supported range
    #[error(
        "Invalid board dimensions {rows}x{cols}: rows and cols must be in {min}..={max}",
        min = MIN_SIDE,
        max = MAX_SIDE
    )]
    InvalidDimensions { rows: i64, cols: i64 },

    /// Start cell not on the board
    #[error("Start cell ({row}, {col}) is outside the {rows}x{cols} board")]
    StartOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

/// Result type alias for KnightForge operations
pub type Result<T> = std::result::Result<T, TourError>;
