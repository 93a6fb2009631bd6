//! Knight's Tour Example
//!
//! Finds a path for a chess knight that visits every cell of a rectangular
//! board exactly once, starting from a chosen cell, and prints the move
//! numbers as a grid.
//!
//! ```text
//! cargo run -p tour -- --rows 8 --cols 8 --row 0 --col 0 --timeout 5
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use knightforge::prelude::*;

#[derive(Parser)]
#[command(name = "tour", version, about)]
struct Args {
    /// Board rows (1..=40)
    #[arg(long, default_value_t = 8)]
    rows: i64,
    /// Board columns (1..=40)
    #[arg(long, default_value_t = 8)]
    cols: i64,
    /// Start row, 0-indexed
    #[arg(long, default_value_t = 0)]
    row: i64,
    /// Start column, 0-indexed
    #[arg(long, default_value_t = 0)]
    col: i64,
    /// Time limit in seconds; falls back to solver.toml, then 10s
    #[arg(short, long)]
    timeout: Option<f64>,
    /// Seed for tie-breaking; random when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Move ordering heuristic
    #[arg(long, value_enum)]
    ordering: Option<Ordering>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Ordering {
    Warnsdorff,
    WarnsdorffStable,
    MoveSetOrder,
}

impl From<Ordering> for MoveOrderingType {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Warnsdorff => MoveOrderingType::Warnsdorff,
            Ordering::WarnsdorffStable => MoveOrderingType::WarnsdorffStable,
            Ordering::MoveSetOrder => MoveOrderingType::MoveSetOrder,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    knightforge::console::init();

    let mut config = SolverConfig::load(knightforge::CONFIG_FILE).unwrap_or_default();
    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(ordering) = args.ordering {
        config = config.with_move_ordering(ordering.into());
    }

    let mut request = TourRequest::new(args.rows, args.cols, args.row, args.col);
    if let Some(secs) = args.timeout {
        request = request.with_time_limit_secs(secs);
    }

    match TourSolver::with_config(config).solve(&request) {
        Ok(result) => match result.outcome {
            SolveOutcome::Found(tour) => {
                println!(
                    "\n{}x{} tour from ({}, {}){}:",
                    args.rows,
                    args.cols,
                    args.row,
                    args.col,
                    if tour.is_closed() { ", closed" } else { "" }
                );
                print!("{}", tour);
                ExitCode::SUCCESS
            }
            SolveOutcome::NotFound => {
                println!("\nNo knight's tour exists from this start cell.");
                ExitCode::from(1)
            }
            SolveOutcome::TimedOut => {
                println!("\nTime limit reached before a tour was found.");
                ExitCode::from(2)
            }
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(3)
        }
    }
}
