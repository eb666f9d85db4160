//! History consistency invariant: history matches occupied squares.

use super::Invariant;
use crate::Match;

/// Invariant: Every history entry is a distinct occupied square, and
/// every occupied square appears in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();
        let filled = crate::CELLS - game.board().empty_indices().count();

        let mut seen = [false; crate::CELLS];
        for &index in history {
            if index >= crate::CELLS || seen[index] || game.board().is_empty(index) {
                return false;
            }
            seen[index] = true;
        }
        history.len() == filled
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
