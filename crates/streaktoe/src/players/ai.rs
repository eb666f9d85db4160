//! Artificial player backed by the core move selectors.

use super::{MoveChoice, Player};
use anyhow::{Result, anyhow};
use derive_new::new;
use rand::rngs::StdRng;
use std::time::Duration;
use streaktoe_core::{Difficulty, Match, select_ai_move};
use tracing::{debug, instrument};

/// AI that pauses for `delay`, then picks a square at `difficulty`.
#[derive(Debug, new)]
pub struct AiPlayer {
    #[new(into)]
    name: String,
    difficulty: Difficulty,
    delay: Duration,
    rng: StdRng,
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, difficulty = %self.difficulty))]
    async fn get_move(&mut self, game: &Match) -> Result<MoveChoice> {
        let mark = game.turn().ok_or_else(|| anyhow!("Match is already over"))?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let index = select_ai_move(game.board(), mark, self.difficulty, &mut self.rng)?;
        debug!(index, "AI chose square");
        Ok(MoveChoice::Play(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
