//! Search tree nodes
//!
//! Nodes form a backward-only tree: each node holds a shared reference to its
//! parent and nothing else points downward. A node lives as long as the
//! frontier or one of its descendants still references it.

use std::rc::Rc;

use crate::state::{Position, PuzzleState};

/// Shared handle to a search node
pub type NodeRef<S> = Rc<SearchNode<S>>;

/// Represents a node in the search tree
///
/// Nodes are immutable once built. Progress starts at 1 for the root and
/// grows by exactly one per move, so it is strictly increasing along every
/// parent chain.
#[derive(Debug)]
pub struct SearchNode<S: PuzzleState> {
    /// The puzzle state at this node
    pub state: S,

    /// The node this one was expanded from (None for root)
    pub parent: Option<NodeRef<S>>,

    /// Move count plus one
    pub progress: u32,

    /// Cell consumed by the move that produced this node
    ///
    /// `(0, 0)` for the root.
    pub last_changed: Position,
}

impl<S: PuzzleState> SearchNode<S> {
    /// Creates the root node for a search
    pub fn root(state: S) -> Self {
        SearchNode {
            state,
            parent: None,
            progress: 1,
            last_changed: (0, 0),
        }
    }

    /// Creates a child of `parent` reached by consuming `last_changed`
    pub fn child(parent: &NodeRef<S>, state: S, last_changed: Position) -> Self {
        SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            progress: parent.progress + 1,
            last_changed,
        }
    }

    /// Returns true if this node has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of moves from the root
    pub fn depth(&self) -> u32 {
        self.progress - 1
    }

    /// Walks from this node back to the root
    pub fn lineage(&self) -> Lineage<'_, S> {
        Lineage { next: Some(self) }
    }

    /// Returns the states from the root down to this node
    pub fn path_from_root(&self) -> Vec<S> {
        let mut states: Vec<S> = self.lineage().map(|node| node.state.clone()).collect();
        states.reverse();
        states
    }
}

/// Iterator over a node and its ancestors, nearest first
pub struct Lineage<'a, S: PuzzleState> {
    next: Option<&'a SearchNode<S>>,
}

impl<'a, S: PuzzleState> Iterator for Lineage<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
