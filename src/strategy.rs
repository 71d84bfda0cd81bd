//! The five search strategies over the peg solitaire board
//!
//! Each strategy is a combination of frontier, selection policy and optional
//! deepening limit layered over the same [`Solver`].

use std::fmt;

use crate::{
    board::Board,
    config::SolverConfig,
    frontier::{QueueFrontier, StackFrontier},
    policy::{HeuristicPruning, PositionalOrder, RandomOrder},
    solver::Solver,
};

/// A preconfigured search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Stack frontier, positional ordering
    DepthFirst,

    /// Queue frontier, positional ordering
    BreadthFirst,

    /// Depth-first runs with depth caps `1..=max_depth`
    IterativeDeepening {
        /// Largest depth cap tried
        max_depth: u32,
    },

    /// Stack frontier, random ordering of every batch
    RandomDepthFirst,

    /// Stack frontier, heuristic pruning of every batch
    HeuristicDepthFirst,
}

impl Strategy {
    /// All strategies in their customary running order
    pub fn all(max_depth: u32) -> [Strategy; 5] {
        [
            Strategy::DepthFirst,
            Strategy::BreadthFirst,
            Strategy::IterativeDeepening { max_depth },
            Strategy::RandomDepthFirst,
            Strategy::HeuristicDepthFirst,
        ]
    }

    /// Human readable name of the search method
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::IterativeDeepening { .. } => "Iterative Deepening Search",
            Strategy::RandomDepthFirst => "Depth-First Search with Random Selection",
            Strategy::HeuristicDepthFirst => "Depth-First Search with a Node Selection Heuristic",
        }
    }

    /// Builds a solver for `board` wired according to this strategy
    ///
    /// Iterative deepening overrides the deepening limit of `config`; every
    /// other strategy clears it.
    pub fn solver(self, board: Board, config: SolverConfig) -> Solver<Board> {
        let mut config = config;
        config.deepening_limit = match self {
            Strategy::IterativeDeepening { max_depth } => Some(max_depth),
            _ => None,
        };

        let solver = Solver::new(board, config);
        match self {
            Strategy::DepthFirst | Strategy::IterativeDeepening { .. } => solver
                .with_frontier(StackFrontier::new())
                .with_selection_policy(PositionalOrder::new()),
            Strategy::BreadthFirst => solver
                .with_frontier(QueueFrontier::new())
                .with_selection_policy(PositionalOrder::new()),
            Strategy::RandomDepthFirst => solver
                .with_frontier(StackFrontier::new())
                .with_selection_policy(RandomOrder::new()),
            Strategy::HeuristicDepthFirst => solver
                .with_frontier(StackFrontier::new())
                .with_selection_policy(HeuristicPruning::new(Board::heuristic_score)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
