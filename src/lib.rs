//! # pegsearch
//!
//! A state-space search engine for peg solitaire, built around interchangeable
//! frontier and selection policies.
//!
//! The engine explores a puzzle's configuration space one popped node at a time.
//! The order of exploration is decided by two pluggable pieces:
//!
//! - a [`Frontier`] that stores pending nodes (a stack for depth-first order,
//!   a queue for breadth-first order)
//! - a [`SelectionPolicy`] that reorders or prunes every freshly expanded batch
//!   of siblings before it enters the frontier
//!
//! Stop criteria (deadline, frontier ceiling, depth cap), best-result tracking
//! and solution reconstruction are shared by every combination.
//!
//! ## Basic Usage
//!
//! ```
//! use pegsearch::{Board, Outcome, SolverConfig, Strategy};
//!
//! // One jump away from the goal: the peg on (3, 1) jumps into the center.
//! let board = Board::from_rows(&[
//!     "  ...  ",
//!     "  ...  ",
//!     ".......",
//!     ".OO....",
//!     ".......",
//!     "  ...  ",
//!     "  ...  ",
//! ])?;
//!
//! let mut solver = Strategy::DepthFirst.solver(board, SolverConfig::default());
//! let report = solver.search()?;
//!
//! assert_eq!(report.outcome, Outcome::Optimal);
//! assert_eq!(report.path.map(|p| p.len()), Some(2));
//! println!("{}", report.statistics.summary());
//! # Ok::<(), pegsearch::SearchError>(())
//! ```
//!
//! ## Strategies
//!
//! | Strategy                  | Frontier | Selection          |
//! |---------------------------|----------|--------------------|
//! | `DepthFirst`              | stack    | positional order   |
//! | `BreadthFirst`            | queue    | positional order   |
//! | `IterativeDeepening`      | stack    | positional order   |
//! | `RandomDepthFirst`        | stack    | random permutation |
//! | `HeuristicDepthFirst`     | stack    | heuristic pruning  |
//!
//! Iterative deepening repeats the depth-first run with depth caps `1..=max_depth`.
//! Heuristic pruning discards the worse half of every batch and is therefore
//! incomplete: it can miss the solution path.
//!
//! ## Custom Policies
//!
//! Any combination can be wired by hand:
//!
//! ```
//! use std::time::Duration;
//! use pegsearch::{
//!     frontier::QueueFrontier,
//!     policy::selection::RandomOrder,
//!     Board, Solver, SolverConfig,
//! };
//!
//! let config = SolverConfig::default()
//!     .with_time_limit(Duration::from_millis(50))
//!     .with_frontier_ceiling(10_000);
//!
//! let mut solver = Solver::new(Board::english(), config)
//!     .with_frontier(QueueFrontier::new())
//!     .with_selection_policy(RandomOrder::with_seed(7));
//!
//! let report = solver.search()?;
//! println!("{:?} after {} nodes", report.outcome, report.statistics.expanded_nodes);
//! # Ok::<(), pegsearch::SearchError>(())
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod solver;
pub mod state;
pub mod stats;
pub mod strategy;

pub use board::{Board, Cell};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Bookkeeping, SolverConfig};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use node::{NodeRef, SearchNode};
pub use policy::{HeuristicPruning, PositionalOrder, RandomOrder, SelectionPolicy};
pub use report::{Outcome, SearchReport};
pub use solver::Solver;
pub use state::{Position, PuzzleState};
pub use stats::{SearchStatistics, Termination};
pub use strategy::Strategy;

/// Error types for the search engine
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A node was requested from an empty frontier
    ///
    /// The solver loop guards every pop, so this signals a broken invariant.
    #[error("Pop requested from an empty frontier")]
    EmptyFrontier,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A board description could not be parsed
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
