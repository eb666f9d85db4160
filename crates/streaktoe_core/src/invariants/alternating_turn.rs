//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Match, Player};

/// Invariant: Players alternate turns, X first.
///
/// X has played as many marks as O, or one more. While the match is in
/// progress the side to move is X exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        if x != o && x != o + 1 {
            return false;
        }
        match game.turn() {
            Some(turn) => turn == if x == o { Player::X } else { Player::O },
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
