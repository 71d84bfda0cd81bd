//! Search results handed to the presentation layer

use std::fmt;

use crate::{
    node::SearchNode,
    state::PuzzleState,
    stats::{SearchStatistics, Termination},
};

/// Classification of the best result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The best node is a goal state
    Optimal,

    /// A node deeper than the start was found, but not a goal
    SubOptimal {
        /// Pieces left on the best state
        remaining: usize,
    },

    /// The frontier ceiling was hit; no result is usable
    OutOfMemory,

    /// Nothing improved on the starting position
    NoSolution,
}

impl Outcome {
    /// Classifies the best node of a finished search
    pub(crate) fn classify<S: PuzzleState>(
        best: Option<&SearchNode<S>>,
        termination: Termination,
    ) -> Self {
        if termination == Termination::OutOfMemory {
            return Outcome::OutOfMemory;
        }
        match best {
            Some(node) if node.state.is_goal() => Outcome::Optimal,
            Some(node) if !node.is_root() => Outcome::SubOptimal {
                remaining: node.state.pieces(),
            },
            _ => Outcome::NoSolution,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Optimal => write!(f, "Optimum solution found."),
            Outcome::SubOptimal { remaining } => write!(
                f,
                "Sub-optimum solution found with {} remaining pegs.",
                remaining
            ),
            Outcome::OutOfMemory => write!(f, "No solution found - Out of Memory"),
            Outcome::NoSolution => write!(f, "No solution found."),
        }
    }
}

/// Everything a finished search exposes
#[derive(Debug, Clone)]
pub struct SearchReport<S: PuzzleState> {
    /// Classification of the best node
    pub outcome: Outcome,

    /// States from the start to the best node
    ///
    /// `None` when the search ran out of memory or recorded no node.
    pub path: Option<Vec<S>>,

    /// Progress of the best node, `None` under the same conditions as `path`
    pub best_progress: Option<u32>,

    /// Run metrics
    pub statistics: SearchStatistics,
}

impl<S: PuzzleState> SearchReport<S> {
    pub(crate) fn new(best: Option<&SearchNode<S>>, statistics: SearchStatistics) -> Self {
        let outcome = Outcome::classify(best, statistics.termination);
        let usable = best.filter(|_| outcome != Outcome::OutOfMemory);

        SearchReport {
            outcome,
            path: usable.map(SearchNode::path_from_root),
            best_progress: usable.map(|node| node.progress),
            statistics,
        }
    }

    /// One-line verdict naming the limit that cut the search short, if any
    pub fn headline(&self) -> String {
        match (self.outcome, self.statistics.termination) {
            (Outcome::NoSolution, Termination::TimedOut) => {
                "No solution found - Time Limit".to_string()
            }
            (outcome, _) => outcome.to_string(),
        }
    }

    /// Number of moves on the reported path
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|states| states.len().saturating_sub(1))
    }
}
