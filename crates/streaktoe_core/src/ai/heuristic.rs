//! One-ply lookahead: win if possible, otherwise block.

use super::{MoveSelector, RandomSelector, TrialMove};
use crate::rules::evaluate;
use crate::{Board, NoLegalMove, Outcome, Player};
use rand::RngCore;
use tracing::trace;

/// Takes an immediate win, else blocks the opponent's immediate win,
/// else falls back to [`RandomSelector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSelector;

impl HeuristicSelector {
    /// First empty square where `mark` completes a line.
    pub fn winning_square(board: &Board, mark: Player) -> Option<usize> {
        let mut scratch = *board;
        let candidates: Vec<usize> = board.empty_indices().collect();
        candidates.into_iter().find(|&index| {
            TrialMove::place(&mut scratch, index, mark)
                .is_some_and(|trial| evaluate(&trial) == Outcome::Win(mark))
        })
    }
}

impl MoveSelector for HeuristicSelector {
    fn choose(
        &self,
        board: &Board,
        mark: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        if let Some(index) = Self::winning_square(board, mark) {
            trace!(index, "Taking winning square");
            return Ok(index);
        }
        if let Some(index) = Self::winning_square(board, mark.opponent()) {
            trace!(index, "Blocking opponent");
            return Ok(index);
        }
        RandomSelector.choose(board, mark, rng)
    }
}
