//! Win and unbeaten streaks of the human against the AI.

use crate::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Consecutive-result counters that persist across matches.
///
/// `unbeaten_streak >= win_streak` always holds: every win also counts as
/// unbeaten, and a loss clears both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct StreakTracker {
    /// Consecutive human wins.
    win_streak: u32,
    /// Consecutive human wins or draws.
    unbeaten_streak: u32,
}

impl StreakTracker {
    /// Fresh counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the counters from a terminal outcome, seen from `human`.
    ///
    /// `Undecided` leaves the counters alone.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, human: Player) {
        match outcome {
            Outcome::Win(winner) if winner == human => {
                self.win_streak += 1;
                self.unbeaten_streak += 1;
            }
            Outcome::Win(_) => {
                self.win_streak = 0;
                self.unbeaten_streak = 0;
            }
            Outcome::Draw => self.unbeaten_streak += 1,
            Outcome::Undecided => return,
        }
        info!(
            win_streak = self.win_streak,
            unbeaten_streak = self.unbeaten_streak,
            "Streaks updated"
        );
    }
}
