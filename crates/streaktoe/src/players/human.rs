//! Human player reading moves from the terminal.

use super::{MoveChoice, Player};
use crate::input::LineInput;
use anyhow::Result;
use derive_new::new;
use streaktoe_core::{Match, Position};
use tracing::debug;

/// Human player typing a keypad number (1-9) or a square name.
#[derive(Debug, Clone, new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
    input: LineInput,
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Match) -> Result<MoveChoice> {
        let Some(line) = self.input.read_line().await? else {
            debug!(player = %self.name, "Input closed");
            return Ok(MoveChoice::Quit);
        };

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(MoveChoice::Quit);
        }

        Ok(match Position::parse_input(trimmed) {
            Some(pos) => MoveChoice::Play(pos.to_index()),
            None => MoveChoice::Invalid(trimmed.to_string()),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streaktoe_core::Opponent;

    #[tokio::test]
    async fn test_reads_numbers_names_and_quit() {
        let input = LineInput::from_reader(&b"5\ntop right\nnowhere\nQ\n"[..]);
        let mut player = HumanPlayer::new("Ada", input);
        let game = Match::new(Opponent::Human);

        assert_eq!(player.get_move(&game).await.unwrap(), MoveChoice::Play(4));
        assert_eq!(player.get_move(&game).await.unwrap(), MoveChoice::Play(2));
        assert_eq!(
            player.get_move(&game).await.unwrap(),
            MoveChoice::Invalid("nowhere".to_string())
        );
        assert_eq!(player.get_move(&game).await.unwrap(), MoveChoice::Quit);
        // End of input also quits.
        assert_eq!(player.get_move(&game).await.unwrap(), MoveChoice::Quit);
    }
}
