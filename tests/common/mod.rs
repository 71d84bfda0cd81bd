//! Shared test fixtures

#![allow(dead_code)]

use std::rc::Rc;

use pegsearch::{Board, NodeRef, Position, PuzzleState, SearchNode};

/// A synthetic search tree: every node below `max_depth` has `branching`
/// children, and exactly one path (if any) is a goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub path: Vec<usize>,
    pub max_depth: usize,
    pub branching: usize,
    pub goal: Option<Vec<usize>>,
}

impl Tree {
    pub fn new(max_depth: usize, branching: usize) -> Self {
        Tree {
            path: Vec::new(),
            max_depth,
            branching,
            goal: None,
        }
    }

    pub fn with_goal(mut self, goal: Vec<usize>) -> Self {
        self.goal = Some(goal);
        self
    }
}

impl PuzzleState for Tree {
    fn successors(&self) -> Vec<(Self, Position)> {
        if self.path.len() >= self.max_depth {
            return vec![];
        }
        (0..self.branching)
            .map(|i| {
                let mut child = self.clone();
                child.path.push(i);
                (child, (self.path.len(), i))
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.goal.as_ref() == Some(&self.path)
    }

    fn pieces(&self) -> usize {
        self.max_depth - self.path.len() + 1
    }
}

/// An inert state carrying only an identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token(pub i64);

impl PuzzleState for Token {
    fn successors(&self) -> Vec<(Self, Position)> {
        vec![]
    }

    fn is_goal(&self) -> bool {
        false
    }

    fn pieces(&self) -> usize {
        0
    }
}

/// Root node holding `Token(0)`
pub fn token_root() -> NodeRef<Token> {
    Rc::new(SearchNode::root(Token(0)))
}

/// Child of `parent` holding `Token(id)` that consumed `position`
pub fn token_child(parent: &NodeRef<Token>, id: i64, position: Position) -> NodeRef<Token> {
    Rc::new(SearchNode::child(parent, Token(id), position))
}

/// Identifiers of a batch, in order
pub fn ids(batch: &[NodeRef<Token>]) -> Vec<i64> {
    batch.iter().map(|node| node.state.0).collect()
}

/// One jump from the goal: (3, 1) jumps over (3, 2) into the center
pub fn one_move_board() -> Board {
    Board::from_rows(&[
        "  ...  ",
        "  ...  ",
        ".......",
        ".OO....",
        ".......",
        "  ...  ",
        "  ...  ",
    ])
    .unwrap()
}

/// Two jumps from the goal, with a dead-end alternative first move
pub fn two_move_board() -> Board {
    Board::from_rows(&[
        "  ...  ",
        "  O..  ",
        "..O....",
        ".O.....",
        ".......",
        "  ...  ",
        "  ...  ",
    ])
    .unwrap()
}

/// Pegs that cannot move at all
pub fn stuck_board() -> Board {
    Board::from_rows(&[
        "  O.O  ",
        "  ...  ",
        ".......",
        ".......",
        ".......",
        "  ...  ",
        "  ...  ",
    ])
    .unwrap()
}
