//! Contract-based validation for match transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions always run and gate every board write;
//! postconditions run in debug builds after each committed ply.

use crate::invariants::{InvariantSet, InvariantViolation, MatchInvariants};
use crate::{IllegalMove, InvalidMove, Match, MatchState, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the match has not ended.
pub struct MatchActive;

impl MatchActive {
    /// Fails with [`IllegalMove::MatchOver`] on a terminal match.
    pub fn check(game: &Match) -> Result<(), IllegalMove> {
        match game.state() {
            MatchState::InProgress { .. } => Ok(()),
            MatchState::Terminal { .. } => Err(IllegalMove::MatchOver),
        }
    }
}

/// Precondition: the target square exists and is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with the board's reason for refusing `index`.
    pub fn check(index: usize, game: &Match) -> Result<(), IllegalMove> {
        match game.board().get(index) {
            None => Err(InvalidMove::OutOfRange(index).into()),
            Some(_) if !game.board().is_empty(index) => Err(InvalidMove::Occupied(index).into()),
            Some(_) => Ok(()),
        }
    }
}

/// Contract for placing the current turn's mark.
///
/// Preconditions:
/// - Match still in progress
/// - Square on the board and empty
///
/// Postconditions:
/// - Exactly one square filled, by the mark that was to move
/// - All [`MatchInvariants`] hold
pub struct MoveContract;

impl Contract<Match, usize> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Match, index: &usize) -> Result<(), IllegalMove> {
        MatchActive::check(game)
            .and_then(|()| SquareIsEmpty::check(*index, game))
            .inspect_err(|e| warn!(error = %e, "Move rejected"))
    }

    fn post(before: &Match, after: &Match) -> Result<(), InvariantViolation> {
        let grew_by_one = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        let mover_placed = match (before.turn(), after.history().last()) {
            (Some(turn), Some(&index)) => {
                after.board().get(index).and_then(Square::mark) == Some(turn)
            }
            _ => false,
        };
        if !(grew_by_one && mover_placed) {
            return Err(InvariantViolation::new("Exactly one mark placed by the side to move"));
        }

        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}
