//! Exhaustive game-tree search.
//!
//! Terminal positions score `10 - depth` for an AI win, `depth - 10` for an
//! AI loss and `0` for a draw, where `depth` counts plies below the root
//! candidate. Faster wins and slower losses score better.

use super::{MoveSelector, TrialMove};
use crate::rules::evaluate;
use crate::{Board, NoLegalMove, Outcome, Player};
use rand::RngCore;
use tracing::trace;

const WIN_SCORE: i32 = 10;

/// Full minimax over the remaining game tree.
///
/// Optimal on a 3x3 board: it never loses and converts every forced win.
/// Ties go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MinimaxSelector {
    /// Scores every empty square for `mark`, in ascending index order.
    pub fn scores(board: &Board, mark: Player) -> Vec<(usize, i32)> {
        let mut scratch = *board;
        let candidates: Vec<usize> = board.empty_indices().collect();
        candidates
            .into_iter()
            .filter_map(|index| {
                let mut trial = TrialMove::place(&mut scratch, index, mark)?;
                Some((index, minimax(&mut trial, mark, 0, false)))
            })
            .collect()
    }
}

impl MoveSelector for MinimaxSelector {
    fn choose(
        &self,
        board: &Board,
        mark: Player,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, NoLegalMove> {
        let mut best: Option<(usize, i32)> = None;
        for (index, score) in Self::scores(board, mark) {
            trace!(index, score, "Scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index).ok_or(NoLegalMove)
    }
}

/// Value of `board` for `ai`, with `maximizing` set when `ai` is to move.
fn minimax(board: &mut Board, ai: Player, depth: i32, maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Win(winner) if winner == ai => return WIN_SCORE - depth,
        Outcome::Win(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Undecided => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let candidates: Vec<usize> = board.empty_indices().collect();
    let scores = candidates.into_iter().filter_map(|index| {
        let mut trial = TrialMove::place(&mut *board, index, mover)?;
        Some(minimax(&mut trial, ai, depth + 1, !maximizing))
    });

    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, mark) in marks {
            board.set(i, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        // X X _ / O O _ / _ _ _
        let b = board(&[(0, Player::X), (1, Player::X), (3, Player::O), (4, Player::O)]);
        let scores = MinimaxSelector::scores(&b, Player::X);
        assert_eq!(scores.first(), Some(&(2, 10)));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X X _ / O O _ / _ _ _ with X to move: 2 wins now.
        let b = board(&[(0, Player::X), (1, Player::X), (3, Player::O), (4, Player::O)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(MinimaxSelector.choose(&b, Player::X, &mut rng), Ok(2));
        assert_eq!(MinimaxSelector.choose(&b, Player::O, &mut rng), Ok(5));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        // Every reply to a center opening that draws is a corner; 0 is first.
        let b = board(&[(4, Player::X)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(MinimaxSelector.choose(&b, Player::O, &mut rng), Ok(0));
    }

    #[test]
    fn test_edge_reply_to_center_loses() {
        let b = board(&[(4, Player::X)]);
        let scores = MinimaxSelector::scores(&b, Player::O);
        for (index, score) in scores {
            if [1, 3, 5, 7].contains(&index) {
                assert!(score < 0, "edge {index} should lose, scored {score}");
            } else {
                assert_eq!(score, 0, "corner {index} should draw");
            }
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let b = board(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
        let before = b;
        let mut rng = StdRng::seed_from_u64(0);
        MinimaxSelector.choose(&b, Player::O, &mut rng).unwrap();
        assert_eq!(b, before);
    }
}
