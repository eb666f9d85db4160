//! Command-line interface for streaktoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use streaktoe_core::Difficulty;

/// Streaktoe - tic-tac-toe against a tiered AI, with persisted streaks
#[derive(Parser, Debug)]
#[command(name = "streaktoe")]
#[command(about = "Tic-tac-toe against a tiered AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to streaktoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// AI strength: random|heuristic|exhaustive (or easy|medium|hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Two humans share the board, no AI
        #[arg(long)]
        hot_seat: bool,

        /// Let the AI play X and move first
        #[arg(long)]
        ai_first: bool,

        /// Pause before each AI move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Name shown for X
        #[arg(long)]
        player_x: Option<String>,

        /// Name shown for O
        #[arg(long)]
        player_o: Option<String>,

        /// Statistics file
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show streaks, score and recent results
    Stats {
        /// Statistics file
        #[arg(long)]
        stats: Option<PathBuf>,
    },

    /// Clear the score and recent results (streaks are kept)
    ResetScore {
        /// Statistics file
        #[arg(long)]
        stats: Option<PathBuf>,
    },

    /// Pit two AIs against each other and report the tally
    SelfPlay {
        /// Difficulty for X
        #[arg(long, default_value = "exhaustive")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(long, default_value = "exhaustive")]
        o: Difficulty,

        /// Number of games
        #[arg(short = 'n', long, default_value = "10")]
        games: u32,

        /// Seed for the AIs' random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
