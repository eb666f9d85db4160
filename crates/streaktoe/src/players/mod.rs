//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use streaktoe_core::Match;

/// What a player decided to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveChoice {
    /// Place the mark at this index (0-8).
    Play(usize),
    /// Leave the game.
    Quit,
    /// Input that named no square; the player is asked again.
    Invalid(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's decision for the side to move in `game`.
    async fn get_move(&mut self, game: &Match) -> Result<MoveChoice>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when moves come from a person at the keyboard.
    fn is_human(&self) -> bool {
        false
    }
}
