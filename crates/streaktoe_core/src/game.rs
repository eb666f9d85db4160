//! Turn-taking state machine for a single match.
//!
//! A [`Match`] owns its board for its whole life. Every transition is
//! validated before anything is written, so a rejected move leaves the
//! match exactly as it was. Once terminal, a match never accepts another
//! move; [`Match::restart`] builds a fresh one.

use crate::ai::{Difficulty, select_ai_move};
use crate::contracts::{Contract, MoveContract};
use crate::rules::evaluate;
use crate::{Board, CELLS, IllegalMove, Outcome, Player, Square};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits across from the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Two humans share the board.
    Human,
    /// An artificial player.
    Ai {
        /// The mark the AI plays.
        mark: Player,
        /// How hard it plays.
        difficulty: Difficulty,
    },
}

impl Opponent {
    /// AI holding O against a human X.
    pub fn ai(difficulty: Difficulty) -> Self {
        Opponent::Ai {
            mark: Player::O,
            difficulty,
        }
    }
}

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for `turn` to move.
    InProgress {
        /// Mark to move next.
        turn: Player,
    },
    /// Ended in a win or a draw.
    Terminal {
        /// Never [`Outcome::Undecided`].
        outcome: Outcome,
    },
}

/// One game from empty board to win or draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    state: MatchState,
    opponent: Opponent,
    history: Vec<usize>,
}

impl Match {
    /// Creates a new match: empty board, X to move.
    #[instrument]
    pub fn new(opponent: Opponent) -> Self {
        info!("Starting new match");
        Self {
            board: Board::new(),
            state: MatchState::InProgress { turn: Player::X },
            opponent,
            history: Vec::new(),
        }
    }

    /// Creates a fresh match with the same opponent.
    pub fn restart(&self) -> Self {
        Self::new(self.opponent)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only copy of the 9 squares.
    pub fn current_board(&self) -> [Square; CELLS] {
        *self.board.squares()
    }

    /// Returns the current phase.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the opponent configuration.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Squares played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Mark to move, or `None` once the match has ended.
    pub fn turn(&self) -> Option<Player> {
        match self.state {
            MatchState::InProgress { turn } => Some(turn),
            MatchState::Terminal { .. } => None,
        }
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// True once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::Terminal { .. })
    }

    /// The AI's mark, if this match has one.
    pub fn ai_mark(&self) -> Option<Player> {
        match self.opponent {
            Opponent::Ai { mark, .. } => Some(mark),
            Opponent::Human => None,
        }
    }

    /// The human's mark when playing against the AI.
    pub fn human_mark(&self) -> Option<Player> {
        self.ai_mark().map(Player::opponent)
    }

    /// True while the AI is the side to move.
    pub fn awaiting_ai(&self) -> bool {
        self.turn().is_some() && self.turn() == self.ai_mark()
    }

    /// Applies one ply for whoever is to move. No AI continuation.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::MatchOver`] on a finished match, or
    /// [`IllegalMove::Board`] if the square is off the board or taken.
    #[instrument(skip(self), fields(turn = ?self.turn()))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, IllegalMove> {
        MoveContract::pre(self, &index)?;
        let MatchState::InProgress { turn } = self.state else {
            return Err(IllegalMove::MatchOver);
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(index, turn)?;
        self.history.push(index);

        let outcome = evaluate(&self.board);
        self.state = if outcome.is_terminal() {
            info!(?outcome, "Match finished");
            MatchState::Terminal { outcome }
        } else {
            MatchState::InProgress {
                turn: turn.opponent(),
            }
        };
        debug!(index, mark = %turn, ?outcome, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            panic!("{e}");
        }

        Ok(outcome)
    }

    /// Human move, followed immediately by the AI's reply if one is due.
    ///
    /// # Errors
    ///
    /// As [`Match::play`], plus [`IllegalMove::NotYourTurn`] while the AI is
    /// to move. The match is unchanged on error.
    #[instrument(skip(self, rng))]
    pub fn submit_move(
        &mut self,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Outcome, IllegalMove> {
        if self.awaiting_ai() {
            return Err(IllegalMove::NotYourTurn);
        }
        let outcome = self.play(index)?;
        if outcome == Outcome::Undecided && self.awaiting_ai() {
            return self.ai_move(rng);
        }
        Ok(outcome)
    }

    /// Selects and applies the AI's ply.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::MatchOver`] on a finished match,
    /// [`IllegalMove::NotAiTurn`] when a human is to move.
    ///
    /// # Panics
    ///
    /// If the selector finds no empty square on an in-progress board, which
    /// the evaluator rules out.
    #[instrument(skip(self, rng))]
    pub fn ai_move(&mut self, rng: &mut dyn RngCore) -> Result<Outcome, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::MatchOver);
        }
        let Opponent::Ai { mark, difficulty } = self.opponent else {
            return Err(IllegalMove::NotAiTurn);
        };
        if self.turn() != Some(mark) {
            return Err(IllegalMove::NotAiTurn);
        }
        let index = select_ai_move(&self.board, mark, difficulty, rng)
            .expect("in-progress board always has an empty square");
        self.play(index)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
