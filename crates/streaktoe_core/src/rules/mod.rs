//! Game rules for tic-tac-toe.
//!
//! Pure functions over any board, live or hypothetical. The AI strategies
//! call these on trial positions as freely as the controller calls them on
//! the match board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner};

use crate::{Board, Outcome};

/// Evaluates a board.
///
/// A completed line wins; otherwise a full board is a draw; otherwise play
/// continues.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}
