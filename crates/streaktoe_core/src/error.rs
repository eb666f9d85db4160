//! Error types for board placement, match transitions and AI selection.

use derive_more::{Display, Error};

/// A placement the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index is outside the 9-cell range.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// A transition the match rejected. The match is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The match has already ended.
    #[display("Game is already over")]
    MatchOver,

    /// The artificial player is to move; human input is ignored.
    #[display("It's not your turn")]
    NotYourTurn,

    /// `ai_move` was called while a human is to move.
    #[display("The AI is not to move")]
    NotAiTurn,

    /// The board refused the placement.
    #[display("{}", _0)]
    Board(InvalidMove),
}

impl From<InvalidMove> for IllegalMove {
    fn from(err: InvalidMove) -> Self {
        IllegalMove::Board(err)
    }
}

/// A selector was asked to move on a board with no empty square.
///
/// Correct callers never trigger this: the controller only asks for a move
/// while the match is undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move available")]
pub struct NoLegalMove;
