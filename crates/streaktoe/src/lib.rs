//! Streaktoe - terminal front end for the streaktoe core.
//!
//! Players, orchestration, configuration and statistics persistence. The
//! game rules and the AI live in `streaktoe_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod orchestrator;
pub mod players;
pub mod store;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use input::LineInput;
pub use orchestrator::{MatchEnd, Orchestrator};
pub use players::{AiPlayer, HumanPlayer, MoveChoice, Player};
pub use store::{StatsStore, StoreError, StoredStats};
