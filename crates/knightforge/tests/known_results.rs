//! End-to-end checks through the public facade.

use std::time::Duration;

use knightforge::prelude::*;
use knightforge::termination::ManualClock;
use knightforge_test::assert_valid_tour;
use knightforge_test::boards::{SOLVABLE, UNSOLVABLE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn request_for(case: &knightforge_test::KnownCase) -> TourRequest {
    TourRequest::new(
        case.rows as i64,
        case.cols as i64,
        case.start_row as i64,
        case.start_col as i64,
    )
}

#[test]
fn test_solve_tour_uses_defaults_without_config_file() {
    let result = solve_tour(&TourRequest::new(6, 6, 0, 0)).unwrap();
    let tour = result.tour().expect("6x6 corner has a tour");
    assert_valid_tour(tour.board(), Cell::new(0, 0), tour.cells());
}

#[test]
fn test_known_boards_through_batch() {
    let config = SolverConfig::new()
        .with_environment_mode(EnvironmentMode::Reproducible)
        .with_time_limit_secs(30.0);

    let requests: Vec<TourRequest> = SOLVABLE.iter().map(request_for).collect();
    for (case, result) in SOLVABLE.iter().zip(solve_batch(&config, &requests)) {
        let result = result.unwrap();
        let tour = result.tour().unwrap();
        assert_valid_tour(&case.board(), case.start(), tour.cells());
    }

    let requests: Vec<TourRequest> = UNSOLVABLE.iter().map(request_for).collect();
    for result in solve_batch(&config, &requests) {
        assert_eq!(result.unwrap().outcome, SolveOutcome::NotFound);
    }
}

#[test]
fn test_input_errors() {
    let solver = TourSolver::new();
    for request in [
        TourRequest::new(0, 8, 0, 0),
        TourRequest::new(8, 0, 0, 0),
        TourRequest::new(41, 41, 0, 0),
        TourRequest::new(8, 8, 8, 8),
        TourRequest::new(8, 8, 0, -1),
    ] {
        assert!(solver.solve(&request).is_err(), "{:?}", request);
    }
}

#[test]
fn test_largest_board_times_out_under_small_budget() {
    let clock = ManualClock::ticking(Duration::from_micros(10));
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let request = TourRequest::new(40, 40, 17, 23).with_time_limit_secs(0.5);

    let config = SolverConfig::new().with_move_ordering(MoveOrderingType::MoveSetOrder);
    let result = TourSolver::with_config(config)
        .solve_with(&request, &mut rng, &clock)
        .unwrap();

    assert_eq!(result.outcome, SolveOutcome::TimedOut);
    assert_eq!(result.statistics.nodes_expanded, 50_000);
}

#[test]
fn test_tour_renders_as_grid() {
    let result = TourSolver::new()
        .solve_with_seed(&TourRequest::new(3, 4, 0, 0), 0)
        .unwrap();
    let tour = result.into_tour().unwrap();

    let grid = tour.visit_order_grid();
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[0][0], 1);

    let mut numbers: Vec<u32> = grid.into_iter().flatten().collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());

    assert_eq!(tour.to_string().lines().count(), 3);
}

#[test]
fn test_manager_receiver() {
    let manager = SolverManager::new(SolverConfig::new().with_random_seed(2));
    let mut receiver: knightforge::SolveReceiver = manager.solve(TourRequest::new(5, 5, 2, 2));
    let event = receiver.blocking_recv().unwrap();
    assert!(event.result.unwrap().is_found());
}
