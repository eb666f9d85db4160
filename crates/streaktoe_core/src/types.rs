//! Core domain types for tic-tac-toe.

use crate::error::InvalidMove;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from empty to occupied. The single exception is the
/// crate-internal [`Board::clear`], used by AI lookahead to undo a trial
/// placement on a scratch copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is off the board or the square is already taken.
    /// The board is unchanged on failure.
    pub fn set(&mut self, index: usize, mark: Player) -> Result<(), InvalidMove> {
        match self.squares.get_mut(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Empties a square. Only trial placements may be undone.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
    }

    /// Checks if a square is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty squares in ascending index order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        (0..CELLS).filter(move |&i| self.squares[i] == Square::Empty)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }
}

/// Result of evaluating a board.
///
/// Always derived from a board, never tracked alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player has three in a row.
    Win(Player),
    /// Board is full with no line.
    Draw,
    /// Play continues.
    Undecided,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Draw | Outcome::Undecided => None,
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}
