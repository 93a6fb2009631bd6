//! Shared test fixtures for KnightForge crates.
//!
//! This crate provides tour assertions and boards with known answers.
//! It depends only on `knightforge-core` so every other crate can use it.
//!
//! - [`assert_valid_tour`] - panics with a precise message on a bad path
//! - [`is_knight_step`] - adjacency check independent of `Cell`
//! - [`boards`] - start positions with known results
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! knightforge-test = { workspace = true }
//! ```

pub mod boards;

use std::collections::HashSet;

use knightforge_core::{Board, Cell};

pub use boards::KnownCase;

/// Returns true if `a` and `b` are one knight leap apart.
pub fn is_knight_step(a: Cell, b: Cell) -> bool {
    let dr = (a.row as i64 - b.row as i64).abs();
    let dc = (a.col as i64 - b.col as i64).abs();
    matches!((dr, dc), (1, 2) | (2, 1))
}

/// Asserts that `cells` is a complete knight's tour of `board` from `start`.
///
/// # Panics
///
/// Panics naming the first violated property.
pub fn assert_valid_tour(board: &Board, start: Cell, cells: &[Cell]) {
    assert_eq!(
        cells.len(),
        board.cell_count(),
        "tour on {} has {} cells",
        board,
        cells.len()
    );
    assert_eq!(cells[0], start, "tour starts at {} instead of {}", cells[0], start);

    let mut seen = HashSet::with_capacity(cells.len());
    for (i, &cell) in cells.iter().enumerate() {
        assert!(
            cell.row < board.rows() && cell.col < board.cols(),
            "step {} at {} is off the {} board",
            i + 1,
            cell,
            board
        );
        assert!(seen.insert(cell), "step {} revisits {}", i + 1, cell);
    }

    for (i, pair) in cells.windows(2).enumerate() {
        assert!(
            is_knight_step(pair[0], pair[1]),
            "step {} -> {} is not a knight move ({} to {})",
            i + 1,
            i + 2,
            pair[0],
            pair[1]
        );
    }
}
