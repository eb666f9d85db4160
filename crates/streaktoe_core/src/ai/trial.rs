//! Scoped trial placements for lookahead.

use crate::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed on a scratch board for the lifetime of this guard.
///
/// Dropping the guard empties the square again, on every exit path.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> TrialMove<'a> {
    /// Places `mark` at `index`, or returns `None` if the square is taken.
    pub(crate) fn place(board: &'a mut Board, index: usize, mark: Player) -> Option<Self> {
        board.set(index, mark).ok()?;
        Some(Self { board, index })
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}
