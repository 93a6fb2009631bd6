//! KnightForge Core - Board, cell and tour types
//!
//! This crate provides the value types shared by every KnightForge crate:
//! - [`Board`] and [`Cell`] with the fixed [`KNIGHT_MOVES`] set
//! - [`Tour`], the ordered path a successful search returns
//! - [`TourRequest`], raw caller input, and its validation
//! - [`TourError`] for input rejected before search

pub mod board;
pub mod error;
pub mod request;
pub mod tour;


pub use board::{Board, Cell, KNIGHT_MOVES, MAX_SIDE, MIN_SIDE};
pub use error::{Result, TourError};
pub use request::{positive_time_limit, TourRequest, DEFAULT_TIME_LIMIT_SECS};
pub use tour::Tour;
