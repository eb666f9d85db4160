//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use streaktoe_core::{Difficulty, Player as Mark};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "streaktoe.toml";

/// Defaults for `play`, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name for X; falls back to the stored name.
    player_x: Option<String>,

    /// Display name for O; falls back to the stored name.
    player_o: Option<String>,

    /// AI strength.
    difficulty: Difficulty,

    /// AI plays X and opens.
    ai_first: bool,

    /// Pause before each AI move, in milliseconds.
    ai_delay_ms: u64,

    /// Where streaks and score are kept.
    stats_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            difficulty: Difficulty::default(),
            ai_first: false,
            ai_delay_ms: 500,
            stats_path: PathBuf::from("streaktoe_stats.json"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(file = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the AI strength.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }

    /// Lets the AI open when `ai_first` is set; never turns it off.
    pub fn with_ai_first(mut self, ai_first: bool) -> Self {
        self.ai_first |= ai_first;
        self
    }

    /// Overrides the AI delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: Option<u64>) -> Self {
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        self
    }

    /// Overrides the player names.
    pub fn with_names(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        self
    }

    /// Name for `mark`: configured, else `stored`, else "Player X"/"Player O".
    pub fn player_name(&self, mark: Mark, stored: Option<&str>) -> String {
        let configured = match mark {
            Mark::X => self.player_x.as_deref(),
            Mark::O => self.player_o.as_deref(),
        };
        configured
            .or(stored)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {mark}"))
    }

    /// Overrides the statistics file.
    pub fn with_stats_path(mut self, stats_path: Option<PathBuf>) -> Self {
        if let Some(path) = stats_path {
            self.stats_path = path;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
