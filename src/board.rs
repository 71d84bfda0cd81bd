//! The peg solitaire board.
//!
//! This module defines the concrete puzzle the engine is run on:
//! - `Cell`: the three cell kinds (empty hole, peg, wall outside the cross)
//! - `Board`: a fixed 7x7 grid with jump-move generation and the board part
//!   of the pruning heuristic

use std::fmt;

use crate::{
    state::{Position, PuzzleState},
    Result, SearchError,
};

/// Width and height of the board grid
pub const BOARD_SIZE: usize = 7;

/// Jump offsets tried from every empty cell: up, down, left, right
const JUMPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Outer corners of the four arms. Pegs left here are hard to clear.
const ARM_CORNERS: [Position; 8] = [
    (0, 2),
    (0, 4),
    (2, 0),
    (4, 0),
    (2, 6),
    (4, 6),
    (6, 2),
    (6, 4),
];

/// The center and the four cells two steps away from it. The final jump
/// into the center starts from one of these.
const NEAR_CENTER: [Position; 5] = [(3, 3), (1, 3), (3, 1), (3, 5), (5, 3)];

const CORNER_PENALTY: i64 = 2;
const NEAR_CENTER_BONUS: i64 = 10;

/// Represents the content of one board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An empty hole a peg can land in
    Empty,
    /// A hole holding a peg
    Peg,
    /// Outside the playable cross
    Wall,
}

impl Cell {
    /// Converts the cell to its character representation
    ///
    /// ```
    /// use pegsearch::Cell;
    /// assert_eq!(Cell::Peg.to_char(), 'O');
    /// assert_eq!(Cell::Wall.to_char(), ' ');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Peg => 'O',
            Cell::Wall => ' ',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'O' | 'o' => Some(Cell::Peg),
            ' ' | '#' => Some(Cell::Wall),
            _ => None,
        }
    }
}

/// A peg solitaire position on a fixed 7x7 grid
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard English cross: 33 holes, every one filled except the center
    pub fn english() -> Self {
        let mut grid = [[Cell::Wall; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let in_cross = (2..=4).contains(&r) || (2..=4).contains(&c);
                if in_cross {
                    *cell = Cell::Peg;
                }
            }
        }
        let (cr, cc) = Self::center();
        grid[cr][cc] = Cell::Empty;
        Board { grid }
    }

    /// Parses a board from seven rows of seven characters
    ///
    /// `O` is a peg, `.` an empty hole, and a space or `#` a wall.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBoard`] when the row count or a row
    /// width is not 7, or when a character is not recognized.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(SearchError::InvalidBoard(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut grid = [[Cell::Wall; BOARD_SIZE]; BOARD_SIZE];
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(SearchError::InvalidBoard(format!(
                    "row {} has {} characters (expected {})",
                    r, width, BOARD_SIZE
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                grid[r][c] = Cell::from_char(ch).ok_or_else(|| {
                    SearchError::InvalidBoard(format!(
                        "unknown character {:?} at ({}, {})",
                        ch, r, c
                    ))
                })?;
            }
        }
        Ok(Board { grid })
    }

    /// The center cell of the grid
    pub const fn center() -> Position {
        (BOARD_SIZE / 2, BOARD_SIZE / 2)
    }

    /// Returns the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Number of pegs on the board
    pub fn peg_count(&self) -> usize {
        self.cells().filter(|&(_, cell)| cell == Cell::Peg).count()
    }

    /// Number of non-wall cells
    pub fn playable_cells(&self) -> usize {
        self.cells().filter(|&(_, cell)| cell != Cell::Wall).count()
    }

    /// Board part of the pruning heuristic; lower is more promising
    ///
    /// Sums the squared distance of every peg to the center, adds a penalty
    /// for each peg stuck on an arm corner, and subtracts a bonus for each
    /// empty near-center cell.
    pub fn heuristic_score(&self) -> i64 {
        let (cr, cc) = Self::center();
        let mut score = 0;

        for ((r, c), cell) in self.cells() {
            if cell != Cell::Peg {
                continue;
            }
            let dr = r as i64 - cr as i64;
            let dc = c as i64 - cc as i64;
            score += dr * dr + dc * dc;

            if ARM_CORNERS.contains(&(r, c)) {
                score += CORNER_PENALTY;
            }
        }

        for &(r, c) in &NEAR_CENTER {
            if self.grid[r][c] == Cell::Empty {
                score -= NEAR_CENTER_BONUS;
            }
        }

        score
    }

    fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &cell)| ((r, c), cell))
        })
    }

    fn offset(pos: Position, dr: isize, dc: isize) -> Option<Position> {
        let r = pos.0.checked_add_signed(dr)?;
        let c = pos.1.checked_add_signed(dc)?;
        (r < BOARD_SIZE && c < BOARD_SIZE).then_some((r, c))
    }
}

impl PuzzleState for Board {
    fn successors(&self) -> Vec<(Self, Position)> {
        let mut children = Vec::new();

        for (target, cell) in self.cells() {
            if cell != Cell::Empty {
                continue;
            }
            for &(dr, dc) in &JUMPS {
                let Some(origin) = Self::offset(target, dr, dc) else {
                    continue;
                };
                let Some(jumped) = Self::offset(target, dr / 2, dc / 2) else {
                    continue;
                };
                if self.grid[origin.0][origin.1] != Cell::Peg
                    || self.grid[jumped.0][jumped.1] != Cell::Peg
                {
                    continue;
                }

                let mut next = self.clone();
                next.grid[origin.0][origin.1] = Cell::Empty;
                next.grid[jumped.0][jumped.1] = Cell::Empty;
                next.grid[target.0][target.1] = Cell::Peg;
                children.push((next, jumped));
            }
        }

        children
    }

    fn is_goal(&self) -> bool {
        let (cr, cc) = Self::center();
        self.grid[cr][cc] == Cell::Peg && self.peg_count() == 1
    }

    fn pieces(&self) -> usize {
        self.peg_count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} pegs)\n{}", self.peg_count(), self)
    }
}
