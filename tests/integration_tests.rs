mod common;

use std::time::Duration;

use common::two_move_board;
use pegsearch::{
    frontier::QueueFrontier, policy::selection::RandomOrder, Board, Outcome, PuzzleState,
    Solver, SolverConfig, Strategy, Termination,
};

/// Consecutive states on a reported path must be single jumps.
fn assert_valid_path(path: &[Board]) {
    for pair in path.windows(2) {
        let (parent, child) = (&pair[0], &pair[1]);
        assert_eq!(child.peg_count() + 1, parent.peg_count());
        assert!(parent
            .successors()
            .into_iter()
            .any(|(next, _)| &next == child));
    }
}

#[test]
fn test_dfs_on_english_board() {
    let config = SolverConfig::default().with_time_limit(Duration::from_secs(20));
    let report = Strategy::DepthFirst
        .solver(Board::english(), config)
        .search()
        .unwrap();

    match report.outcome {
        Outcome::Optimal => {
            let path = report.path.as_ref().unwrap();
            assert_eq!(path.len(), 32);
            assert_eq!(path.last().unwrap().peg_count(), 1);
            assert!(path.last().unwrap().is_goal());
        }
        Outcome::SubOptimal { remaining } => assert!(remaining >= 1),
        other => panic!("unexpected outcome {:?}", other),
    }

    let path = report.path.unwrap();
    assert_eq!(path[0], Board::english());
    assert_valid_path(&path);
    // A stack never comes close to the ceiling on this board.
    assert!(report.statistics.peak_frontier < 1_000);
}

#[test]
fn test_bfs_on_english_board_hits_the_ceiling() {
    let config = SolverConfig::default().with_frontier_ceiling(20_000);
    let report = Strategy::BreadthFirst
        .solver(Board::english(), config)
        .search()
        .unwrap();

    assert_eq!(report.statistics.termination, Termination::OutOfMemory);
    assert_eq!(report.outcome, Outcome::OutOfMemory);
    assert!(report.path.is_none());
}

#[test]
#[ignore = "holds millions of nodes; run with --ignored"]
fn test_bfs_on_english_board_hits_the_default_ceiling() {
    let report = Strategy::BreadthFirst
        .solver(Board::english(), SolverConfig::default())
        .search()
        .unwrap();

    assert_eq!(report.outcome, Outcome::OutOfMemory);
}

#[test]
fn test_heuristic_dfs_on_english_board() {
    let config = SolverConfig::default().with_time_limit(Duration::from_secs(20));
    let report = Strategy::HeuristicDepthFirst
        .solver(Board::english(), config)
        .search()
        .unwrap();

    assert!(matches!(
        report.outcome,
        Outcome::Optimal | Outcome::SubOptimal { .. }
    ));
    assert_valid_path(&report.path.unwrap());
}

#[test]
fn test_every_strategy_solves_a_small_board() {
    let config = SolverConfig::default().with_time_limit(Duration::from_secs(5));
    for strategy in Strategy::all(33) {
        let report = strategy
            .solver(two_move_board(), config.clone())
            .search()
            .unwrap();

        // Heuristic pruning keeps one of the two opening moves; the other
        // strategies are complete on this board.
        if strategy != Strategy::HeuristicDepthFirst {
            assert_eq!(report.outcome, Outcome::Optimal, "{}", strategy);
            assert_eq!(report.moves(), Some(2), "{}", strategy);
        }
        assert_valid_path(&report.path.unwrap());
    }
}

#[test]
fn test_strategy_wiring() {
    let ids = Strategy::IterativeDeepening { max_depth: 12 }
        .solver(Board::english(), SolverConfig::default().with_deepening_limit(99));
    assert_eq!(ids.config().deepening_limit, Some(12));

    let dfs = Strategy::DepthFirst
        .solver(Board::english(), SolverConfig::default().with_deepening_limit(99));
    assert_eq!(dfs.config().deepening_limit, None);

    assert_eq!(
        Strategy::HeuristicDepthFirst.to_string(),
        "Depth-First Search with a Node Selection Heuristic"
    );
}

#[test]
fn test_hand_wired_random_bfs() {
    let config = SolverConfig::default()
        .with_time_limit(Duration::from_secs(5))
        .with_frontier_ceiling(5_000);
    let mut solver = Solver::new(Board::english(), config)
        .with_frontier(QueueFrontier::new())
        .with_selection_policy(RandomOrder::with_seed(3));

    let report = solver.search().unwrap();
    assert!(matches!(
        report.statistics.termination,
        Termination::OutOfMemory | Termination::TimedOut
    ));
    assert!(report.statistics.expanded_nodes > 0);
}
