//! Frontier containers
//!
//! The frontier holds pending nodes. Its pop order, combined with the
//! selection policy's push order, decides the exploration order.

use std::collections::VecDeque;

use crate::{node::NodeRef, state::PuzzleState, Result, SearchError};

/// Trait for containers of pending nodes
pub trait Frontier<S: PuzzleState> {
    /// Adds a node
    fn push(&mut self, node: NodeRef<S>);

    /// Removes the next node according to the container's order
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] when there is nothing to pop.
    fn pop(&mut self) -> Result<NodeRef<S>>;

    /// Number of pending nodes
    fn len(&self) -> usize;

    /// Returns true if no node is pending
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending node
    fn clear(&mut self);

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Last-in-first-out frontier (depth-first order)
#[derive(Debug)]
pub struct StackFrontier<S: PuzzleState> {
    nodes: Vec<NodeRef<S>>,
}

impl<S: PuzzleState> StackFrontier<S> {
    /// Creates an empty stack
    pub fn new() -> Self {
        StackFrontier { nodes: Vec::new() }
    }
}

impl<S: PuzzleState> Default for StackFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PuzzleState> Frontier<S> for StackFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Result<NodeRef<S>> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn name(&self) -> &'static str {
        "stack"
    }
}

/// First-in-first-out frontier (breadth-first order)
#[derive(Debug)]
pub struct QueueFrontier<S: PuzzleState> {
    nodes: VecDeque<NodeRef<S>>,
}

impl<S: PuzzleState> QueueFrontier<S> {
    /// Creates an empty queue
    pub fn new() -> Self {
        QueueFrontier {
            nodes: VecDeque::new(),
        }
    }
}

impl<S: PuzzleState> Default for QueueFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PuzzleState> Frontier<S> for QueueFrontier<S> {
    fn push(&mut self, node: NodeRef<S>) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Result<NodeRef<S>> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn name(&self) -> &'static str {
        "queue"
    }
}

// Implement Frontier for Box<dyn Frontier>
impl<S: PuzzleState> Frontier<S> for Box<dyn Frontier<S>> {
    fn push(&mut self, node: NodeRef<S>) {
        (**self).push(node)
    }

    fn pop(&mut self) -> Result<NodeRef<S>> {
        (**self).pop()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
