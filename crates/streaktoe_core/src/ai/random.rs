//! Uniform random selection.

use super::MoveSelector;
use crate::{Board, NoLegalMove, Player};
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Picks any empty square with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn choose(
        &self,
        board: &Board,
        _mark: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        let empties: Vec<usize> = board.empty_indices().collect();
        empties.choose(rng).copied().ok_or(NoLegalMove)
    }
}
