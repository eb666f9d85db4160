//! JSON persistence for session statistics.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use streaktoe_core::{Opponent, Player as Mark, Session};
use tracing::{debug, info, instrument};

/// Everything kept between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredStats {
    /// Name last used for X.
    #[serde(default)]
    pub player_x: Option<String>,
    /// Name last used for O.
    #[serde(default)]
    pub player_o: Option<String>,
    /// Streaks and scoreboard.
    #[serde(default)]
    pub session: Session,
}

impl StoredStats {
    /// Name last stored for `mark`.
    pub fn name(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => self.player_x.as_deref(),
            Mark::O => self.player_o.as_deref(),
        }
    }

    /// Remembers the names of the human seats. The AI's label is never stored.
    pub fn remember_names(&mut self, opponent: Opponent, name_x: &str, name_o: &str) {
        let ai = match opponent {
            Opponent::Ai { mark, .. } => Some(mark),
            Opponent::Human => None,
        };
        if ai != Some(Mark::X) {
            self.player_x = Some(name_x.to_string());
        }
        if ai != Some(Mark::O) {
            self.player_o = Some(name_o.to_string());
        }
    }
}

/// Reads and writes [`StoredStats`] at a fixed path.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Creates a store for `path`. Nothing is touched until load or save.
    #[instrument(skip(path), fields(file = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads stats; a missing file yields defaults.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<StoredStats, StoreError> {
        if !self.path.exists() {
            debug!("No stats file yet, starting fresh");
            return Ok(StoredStats::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let stats = serde_json::from_str(&content)?;
        debug!("Stats loaded");
        Ok(stats)
    }

    /// Writes stats through a temp file and rename.
    #[instrument(skip(self, stats), fields(path = %self.path.display()))]
    pub fn save(&self, stats: &StoredStats) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(stats)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        info!("Stats saved");
        Ok(())
    }
}

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
