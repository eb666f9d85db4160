//! Running tally of results and the most recent outcomes.

use crate::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// How many recent outcomes the scoreboard keeps.
pub const RECENT_LIMIT: usize = 5;

/// Wins per mark, draws, and the last few outcomes (most recent first).
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Matches won by X.
    x_wins: u32,
    /// Matches won by O.
    o_wins: u32,
    /// Drawn matches.
    draws: u32,
    /// Most recent outcome first, at most [`RECENT_LIMIT`] long.
    #[serde(default)]
    recent: VecDeque<Outcome>,
}

impl Scoreboard {
    /// Empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a terminal outcome. `Undecided` is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => return,
        }
        self.recent.push_front(outcome);
        self.recent.truncate(RECENT_LIMIT);
    }

    /// Wins for `mark`.
    pub fn wins(&self, mark: Player) -> u32 {
        match mark {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total matches counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears the tally and history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
