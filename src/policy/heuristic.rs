//! Heuristic pruning selection policy
//!
//! Scores every sibling, keeps the more promising half and drops the rest.
//! Dropped nodes are never revisited, so a search using this policy is
//! incomplete: it trades the guarantee of finding a solution for a frontier
//! that stays small.

use std::marker::PhantomData;

use crate::{node::NodeRef, policy::selection::SelectionPolicy, state::PuzzleState};

/// Keeps the better half of each batch according to a state evaluation
///
/// A node's score is `evaluate(state) - progress`; lower is more promising,
/// so deeper nodes are favoured. The batch is sorted ascending by score, the
/// worst `floor(N / 2)` nodes are discarded and the remaining `N - floor(N / 2)`
/// are returned worst-first. Pushed onto a stack, the best node is popped next.
///
/// # Example
///
/// ```
/// use pegsearch::{Board, HeuristicPruning};
///
/// let policy = HeuristicPruning::new(|board: &Board| board.heuristic_score());
/// ```
#[derive(Clone)]
pub struct HeuristicPruning<S, F>
where
    S: PuzzleState,
    F: Fn(&S) -> i64,
{
    evaluate: F,
    _phantom: PhantomData<S>,
}

impl<S, F> HeuristicPruning<S, F>
where
    S: PuzzleState,
    F: Fn(&S) -> i64,
{
    /// Creates a new heuristic pruning policy with the given evaluation
    pub fn new(evaluate: F) -> Self {
        HeuristicPruning {
            evaluate,
            _phantom: PhantomData,
        }
    }

    /// Score of a node; lower is more promising
    pub fn score(&self, node: &NodeRef<S>) -> i64 {
        (self.evaluate)(&node.state) - i64::from(node.progress)
    }
}

impl<S, F> SelectionPolicy<S> for HeuristicPruning<S, F>
where
    S: PuzzleState,
    F: Fn(&S) -> i64,
{
    fn select(&self, batch: Vec<NodeRef<S>>) -> Vec<NodeRef<S>> {
        let mut scored: Vec<(i64, NodeRef<S>)> = batch
            .into_iter()
            .map(|node| (self.score(&node), node))
            .collect();
        scored.sort_by_key(|(score, _)| *score);

        let keep = scored.len() - scored.len() / 2;
        scored.truncate(keep);

        scored.into_iter().rev().map(|(_, node)| node).collect()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
