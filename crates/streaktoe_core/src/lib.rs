//! Streaktoe core - tic-tac-toe rules, a tiered AI opponent and streaks.
//!
//! # Architecture
//!
//! - **Board**: 9 squares that only ever fill up
//! - **Rules**: pure win/draw evaluation over any board
//! - **AI**: random, one-ply heuristic and full minimax move selectors
//! - **Match**: the turn-taking state machine that drives a single game
//! - **Session**: streaks and scoreboard across matches
//!
//! Everything here is synchronous and free of I/O. Scheduling a delayed AI
//! move, persisting statistics and rendering text belong to the caller.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use streaktoe_core::{Difficulty, Match, Opponent, Outcome, Session};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut session = Session::new();
//! let mut game = Match::new(Opponent::ai(Difficulty::Exhaustive));
//!
//! // Human X takes the center; the AI answers immediately.
//! let outcome = game.submit_move(4, &mut rng)?;
//! assert_eq!(outcome, Outcome::Undecided);
//! assert_eq!(game.history().len(), 2);
//!
//! if game.is_over() {
//!     session.record(&game);
//! }
//! # Ok::<(), streaktoe_core::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod contracts;
mod error;
mod game;
mod invariants;
mod position;
mod scoreboard;
mod session;
mod streak;
mod types;

pub mod rules;

// Crate-level exports - Board and outcome types
pub use types::{Board, CELLS, Outcome, Player, Square};

// Crate-level exports - Errors
pub use error::{IllegalMove, InvalidMove, NoLegalMove};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - AI
pub use ai::{
    Difficulty, HeuristicSelector, MinimaxSelector, MoveSelector, RandomSelector, select_ai_move,
};

// Crate-level exports - Match controller
pub use game::{Match, MatchState, Opponent};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, MoveContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, MatchInvariants};

// Crate-level exports - Statistics
pub use scoreboard::{RECENT_LIMIT, Scoreboard};
pub use session::Session;
pub use streak::StreakTracker;

/// Alias for clarity where a player's symbol is meant.
pub type Mark = Player;
