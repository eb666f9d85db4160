//! Statistics that outlive a single match.

use crate::{Match, Scoreboard, StreakTracker};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Session-level state: streaks and scoreboard across matches.
///
/// The core only updates these values. Loading and saving them is up to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Session {
    /// Human streaks against the AI.
    #[serde(default)]
    streaks: StreakTracker,
    /// Tally of all finished matches.
    #[serde(default)]
    scoreboard: Scoreboard,
}

impl Session {
    /// Empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished match.
    ///
    /// The scoreboard always counts it; streaks only move when the match
    /// had an AI opponent. Returns `false` and changes nothing if the match
    /// is still in progress.
    #[instrument(skip_all, fields(history = ?game.history()))]
    pub fn record(&mut self, game: &Match) -> bool {
        if !game.is_over() {
            warn!("Ignoring unfinished match");
            return false;
        }
        let outcome = game.outcome();
        self.scoreboard.record(outcome);
        if let Some(human) = game.human_mark() {
            self.streaks.record(outcome, human);
        }
        debug!(?outcome, "Match recorded");
        true
    }

    /// Clears the scoreboard. Streaks are kept.
    pub fn reset_score(&mut self) {
        self.scoreboard.reset();
    }
}
