//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Match, Player};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board, X first and alternating,
/// must reproduce the current board with no square written twice.
pub struct MonotonicBoardInvariant;

impl Invariant<Match> for MonotonicBoardInvariant {
    fn holds(game: &Match) -> bool {
        let mut replayed = Board::new();
        let mut mark = Player::X;
        for &index in game.history() {
            if replayed.set(index, mark).is_err() {
                return false;
            }
            mark = mark.opponent();
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
