//! Traits defining the puzzle state seen by the search engine.
//!
//! The engine never looks inside a state. Everything it needs (children,
//! goal detection, the number of pieces left) goes through [`PuzzleState`].

use std::fmt::Debug;

/// A `(row, column)` cell coordinate
pub type Position = (usize, usize);

/// Trait defining the puzzle state interface required by the solver
///
/// Implementations must be pure: producing successors never modifies `self`.
/// Every move is expected to strictly reduce some monotonic measure of the
/// state (for peg solitaire, the number of pegs), so a state can never recur
/// along a path and the solver needs no visited set.
pub trait PuzzleState: Clone + Debug {
    /// Returns every state reachable in one move, together with the cell the
    /// move consumed
    ///
    /// The order of the returned pairs is the generation order; selection
    /// policies may reorder it before the children reach the frontier.
    ///
    /// # Example
    ///
    /// ```
    /// # use pegsearch::{Board, PuzzleState};
    /// let board = Board::english();
    /// // Four pegs can jump into the empty center.
    /// assert_eq!(board.successors().len(), 4);
    /// ```
    fn successors(&self) -> Vec<(Self, Position)>;

    /// Returns true if this state is an optimal terminal position
    fn is_goal(&self) -> bool;

    /// Returns the number of pieces still on the board
    fn pieces(&self) -> usize;
}
