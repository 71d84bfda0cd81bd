//! Selection policies for freshly expanded siblings
//!
//! A selection policy receives the children of one expansion, in generation
//! order, and returns the sequence to push onto the frontier. It may reorder
//! the batch and it may drop nodes from it.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{node::NodeRef, state::PuzzleState};

/// Trait for policies that order or prune a batch of sibling nodes
pub trait SelectionPolicy<S: PuzzleState> {
    /// Returns the nodes to push, in push order
    fn select(&self, batch: Vec<NodeRef<S>>) -> Vec<NodeRef<S>>;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Deterministic ordering by consumed cell
///
/// Sorts the batch by the cell each move consumed, descending by row and then
/// descending by column. The sort is stable, so moves consuming the same cell
/// keep their generation order. Pushed onto a stack, the move consuming the
/// top-left-most cell is popped first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalOrder;

impl PositionalOrder {
    /// Creates a new positional ordering policy
    pub fn new() -> Self {
        PositionalOrder
    }
}

impl<S: PuzzleState> SelectionPolicy<S> for PositionalOrder {
    fn select(&self, mut batch: Vec<NodeRef<S>>) -> Vec<NodeRef<S>> {
        batch.sort_by(|a, b| b.last_changed.cmp(&a.last_changed));
        batch
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

/// Uniform random permutation of every batch
///
/// The generator is reseeded on every call: from OS entropy by default, or
/// from a fixed seed for reproducible runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrder {
    seed: Option<u64>,
}

impl RandomOrder {
    /// Creates a policy seeded from OS entropy
    pub fn new() -> Self {
        RandomOrder { seed: None }
    }

    /// Creates a policy that reseeds from `seed` on every batch
    pub fn with_seed(seed: u64) -> Self {
        RandomOrder { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl<S: PuzzleState> SelectionPolicy<S> for RandomOrder {
    fn select(&self, mut batch: Vec<NodeRef<S>>) -> Vec<NodeRef<S>> {
        batch.shuffle(&mut self.rng());
        batch
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

// Implement SelectionPolicy for Box<dyn SelectionPolicy>
impl<S: PuzzleState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select(&self, batch: Vec<NodeRef<S>>) -> Vec<NodeRef<S>> {
        (**self).select(batch)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
