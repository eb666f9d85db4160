//! Artificial opponents.
//!
//! Three interchangeable move selectors, chosen per match by [`Difficulty`]:
//!
//! - [`RandomSelector`] - uniform over empty squares, no lookahead
//! - [`HeuristicSelector`] - takes an immediate win, else blocks an
//!   immediate loss, else random
//! - [`MinimaxSelector`] - full game-tree search, never loses
//!
//! Selectors read the board they are given and never mutate it. Lookahead
//! runs on a scratch copy through [`TrialMove`], which undoes each trial
//! placement when it goes out of scope.

mod heuristic;
mod minimax;
mod random;
mod trial;

pub use heuristic::HeuristicSelector;
pub use minimax::MinimaxSelector;
pub use random::RandomSelector;
pub(crate) use trial::TrialMove;

use crate::{Board, NoLegalMove, Player};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI strength, selectable per match.
///
/// Parses from the canonical names or the easy/medium/hard aliases,
/// ignoring case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// No lookahead.
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// One-ply win/block.
    #[serde(alias = "medium")]
    #[strum(to_string = "heuristic", serialize = "medium")]
    Heuristic,
    /// Full minimax.
    #[default]
    #[serde(alias = "hard")]
    #[strum(to_string = "exhaustive", serialize = "hard")]
    Exhaustive,
}

impl Difficulty {
    /// Returns the selector for this difficulty.
    pub fn selector(self) -> &'static dyn MoveSelector {
        match self {
            Difficulty::Random => &RandomSelector,
            Difficulty::Heuristic => &HeuristicSelector,
            Difficulty::Exhaustive => &MinimaxSelector,
        }
    }
}

/// Chooses a square for `mark` to play.
pub trait MoveSelector: Send + Sync {
    /// Picks an empty square on `board` for `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board has no empty square.
    fn choose(
        &self,
        board: &Board,
        mark: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove>;
}

/// Picks the AI's next square at the given difficulty.
#[instrument(skip(board, rng), fields(empty = board.empty_indices().count()))]
pub fn select_ai_move(
    board: &Board,
    mark: Player,
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Result<usize, NoLegalMove> {
    let index = difficulty.selector().choose(board, mark, rng)?;
    debug!(index, "AI selected move");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parses_names_and_aliases() {
        assert_eq!(Difficulty::from_str("random"), Ok(Difficulty::Random));
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Random));
        assert_eq!(Difficulty::from_str("Medium"), Ok(Difficulty::Heuristic));
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Exhaustive));
        assert_eq!(Difficulty::from_str("exhaustive"), Ok(Difficulty::Exhaustive));
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_difficulty_displays_canonical_name() {
        assert_eq!(Difficulty::Random.to_string(), "random");
        assert_eq!(Difficulty::Heuristic.to_string(), "heuristic");
        assert_eq!(Difficulty::Exhaustive.to_string(), "exhaustive");
    }

    #[test]
    fn test_difficulty_serde_accepts_aliases() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Heuristic);
        assert_eq!(serde_json::to_string(&Difficulty::Random).unwrap(), "\"random\"");
    }
}
