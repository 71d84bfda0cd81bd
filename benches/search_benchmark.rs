#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use pegsearch::{
    Board, Position, PuzzleState, QueueFrontier, Solver, SolverConfig, Strategy,
};
use std::time::Duration;

// Complete tree of fixed depth with no goal, so every search exhausts it
#[derive(Clone, Debug)]
struct BenchState {
    depth: usize,
    branching_factor: usize,
    max_depth: usize,
}

impl BenchState {
    fn new(branching_factor: usize, max_depth: usize) -> Self {
        BenchState {
            depth: 0,
            branching_factor,
            max_depth,
        }
    }
}

impl PuzzleState for BenchState {
    fn successors(&self) -> Vec<(Self, Position)> {
        if self.depth >= self.max_depth {
            return vec![];
        }

        (0..self.branching_factor)
            .map(|i| {
                let mut next = self.clone();
                next.depth += 1;
                (next, (self.depth, i))
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        false
    }

    fn pieces(&self) -> usize {
        self.max_depth - self.depth + 1
    }
}

fn bench_tree_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_search");
    group.measurement_time(Duration::from_secs(10));

    // Depth-first against breadth-first over the same complete tree
    for bf in [2, 3, 5].iter() {
        let initial_state = BenchState::new(*bf, 5);

        group.bench_with_input(BenchmarkId::new("stack/branching", bf), bf, |b, &_| {
            b.iter(|| {
                let mut solver = Solver::new(initial_state.clone(), SolverConfig::default());
                black_box(solver.search())
            })
        });

        group.bench_with_input(BenchmarkId::new("queue/branching", bf), bf, |b, &_| {
            b.iter(|| {
                let mut solver = Solver::new(initial_state.clone(), SolverConfig::default())
                    .with_frontier(QueueFrontier::new());
                black_box(solver.search())
            })
        });
    }

    // Deepening repeats the shallow levels once per cap
    for &max_depth in &[4u32, 6, 8] {
        let initial_state = BenchState::new(2, max_depth as usize);
        let config = SolverConfig::default().with_deepening_limit(max_depth + 1);

        group.bench_with_input(
            BenchmarkId::new("deepening/max_depth", max_depth),
            &max_depth,
            |b, &_| {
                b.iter(|| {
                    let mut solver = Solver::new(initial_state.clone(), config.clone());
                    black_box(solver.search())
                })
            },
        );
    }

    group.finish();
}

fn bench_board_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_search");
    group.measurement_time(Duration::from_secs(10));

    // A small ceiling bounds every run, whatever the strategy
    let config = SolverConfig::default()
        .with_time_limit(Duration::from_millis(200))
        .with_frontier_ceiling(2_000);

    for strategy in Strategy::all(33).iter() {
        group.bench_with_input(
            BenchmarkId::new("strategy", strategy.name()),
            strategy,
            |b, &strategy| {
                b.iter(|| {
                    let mut solver = strategy.solver(Board::english(), config.clone());
                    black_box(solver.search())
                })
            },
        );
    }

    group.bench_function("successors/english", |b| {
        let board = Board::english();
        b.iter(|| black_box(board.successors()))
    });

    group.finish();
}

criterion_group!(benches, bench_tree_search, bench_board_search);
criterion_main!(benches);
