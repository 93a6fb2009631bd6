//! Tests for the backtracking engine.

use super::*;
use crate::ordering::{AnyOrdering, MoveSetOrder, Warnsdorff, WarnsdorffStable};
use crate::termination::{Deadline, ManualClock, TimeBudget};
use knightforge_config::MoveOrderingType;
use knightforge_test::assert_valid_tour;
use knightforge_test::boards::{KnownCase, SOLVABLE, UNSOLVABLE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn run_case<O: MoveOrdering>(case: &KnownCase, ordering: &O, seed: u64) -> SearchRun {
    let clock = ManualClock::frozen();
    let deadline = Deadline::start(&clock, TimeBudget::default());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    BacktrackingEngine::new(ordering, &deadline).run(case.board(), case.start(), &mut rng)
}

fn assert_state_matches_path(run: &SearchRun) {
    assert_eq!(run.state.visited_count(), run.path.len());
    for (i, &cell) in run.path.iter().enumerate() {
        assert_eq!(run.state.visit_order(cell), i as u32 + 1);
    }
}

// ============================================================================
// Found
// ============================================================================

#[test]
fn test_single_cell_board() {
    let run = run_case(&KnownCase::new(1, 1, 0, 0), &Warnsdorff, 0);
    assert_eq!(run.status, SearchStatus::Found);
    assert_eq!(run.path, vec![Cell::new(0, 0)]);
    assert_eq!(run.statistics.nodes_expanded, 1);
    assert_eq!(run.statistics.backtracks, 0);
}

#[test]
fn test_solvable_cases_are_found() {
    for case in SOLVABLE {
        for seed in 0..8 {
            let run = run_case(case, &Warnsdorff, seed);
            assert_eq!(run.status, SearchStatus::Found, "{:?} seed {}", case, seed);
            assert_valid_tour(&case.board(), case.start(), &run.path);
            assert_state_matches_path(&run);
            assert_eq!(run.statistics.max_depth, case.board().cell_count());
        }
    }
}

#[test]
fn test_stable_ordering_needs_no_backtracking_on_standard_board() {
    let run = run_case(&KnownCase::new(8, 8, 0, 0), &WarnsdorffStable, 0);
    assert_eq!(run.status, SearchStatus::Found);
    assert_eq!(run.statistics.nodes_expanded, 64);
    assert_eq!(run.statistics.backtracks, 0);
}

#[test]
fn test_same_seed_same_tour() {
    let case = KnownCase::new(8, 8, 3, 5);
    let a = run_case(&case, &Warnsdorff, 11);
    let b = run_case(&case, &Warnsdorff, 11);
    assert_eq!(a.path, b.path);
    assert_eq!(a.statistics, b.statistics);
}

// ============================================================================
// NotFound
// ============================================================================

#[test]
fn test_unsolvable_cases_are_exhausted() {
    for case in UNSOLVABLE {
        let run = run_case(case, &Warnsdorff, 5);
        assert_eq!(run.status, SearchStatus::NotFound, "{:?}", case);
        assert!(run.path.is_empty());
        assert_eq!(run.state.visited_count(), 0);
        assert!(case
            .board()
            .cells()
            .all(|cell| !run.state.is_visited(cell)));
    }
}

#[test]
fn test_single_row_fails_without_descending() {
    let run = run_case(&KnownCase::new(1, 8, 0, 4), &Warnsdorff, 0);
    assert_eq!(run.status, SearchStatus::NotFound);
    assert_eq!(run.statistics.nodes_expanded, 1);
    assert_eq!(run.statistics.backtracks, 1);
}

#[test]
fn test_exhaustion_is_independent_of_ordering() {
    let case = KnownCase::new(4, 4, 0, 0);
    let orderings = [
        AnyOrdering::from(MoveOrderingType::Warnsdorff),
        AnyOrdering::from(MoveOrderingType::WarnsdorffStable),
        AnyOrdering::from(MoveOrderingType::MoveSetOrder),
    ];

    let reference = run_case(&case, &MoveSetOrder, 0).statistics;
    assert_eq!(reference.nodes_expanded, 2223);
    for ordering in &orderings {
        for seed in [1, 2, 3] {
            let stats = run_case(&case, ordering, seed).statistics;
            assert_eq!(stats.nodes_expanded, reference.nodes_expanded);
            assert_eq!(stats.backtracks, reference.backtracks);
        }
    }
}

#[test]
fn test_three_by_four_off_corner() {
    let run = run_case(&KnownCase::new(3, 4, 0, 1), &Warnsdorff, 9);
    assert_eq!(run.status, SearchStatus::NotFound);
    assert_eq!(run.statistics.nodes_expanded, 54);
}

// ============================================================================
// TimedOut
// ============================================================================

#[test]
fn test_ticking_clock_times_out_large_board() {
    let board = Board::new(30, 30).unwrap();
    let clock = ManualClock::ticking(Duration::from_millis(1));
    let deadline = Deadline::start(&clock, TimeBudget::from_duration(Duration::from_millis(100)));
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let run = BacktrackingEngine::new(&Warnsdorff, &deadline).run(board, Cell::new(0, 0), &mut rng);

    assert_eq!(run.status, SearchStatus::TimedOut);
    assert_eq!(run.statistics.nodes_expanded, 100);
    assert!(run.path.len() < board.cell_count());
    assert_state_matches_path(&run);
}

#[test]
fn test_expired_deadline_beats_found() {
    let clock = ManualClock::frozen();
    let deadline = Deadline::start(&clock, TimeBudget::from_duration(Duration::from_millis(1)));
    clock.advance(Duration::from_millis(1));
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let board = Board::new(1, 1).unwrap();
    let run = BacktrackingEngine::new(&Warnsdorff, &deadline).run(board, Cell::new(0, 0), &mut rng);

    assert_eq!(run.status, SearchStatus::TimedOut);
    assert_eq!(run.path, vec![Cell::new(0, 0)]);
}

#[test]
fn test_timeout_stops_exhaustion() {
    let clock = ManualClock::ticking(Duration::from_millis(1));
    let deadline = Deadline::start(&clock, TimeBudget::from_duration(Duration::from_millis(10)));
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let board = Board::new(4, 4).unwrap();
    let run = BacktrackingEngine::new(&Warnsdorff, &deadline).run(board, Cell::new(0, 0), &mut rng);

    assert_eq!(run.status, SearchStatus::TimedOut);
    assert_eq!(run.statistics.nodes_expanded, 10);
    assert_state_matches_path(&run);
}
