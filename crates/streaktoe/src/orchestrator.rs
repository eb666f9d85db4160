//! Game orchestration between players.

use crate::input::LineInput;
use crate::players::{MoveChoice, Player};
use crate::store::{StatsStore, StoredStats};
use crate::ui;
use anyhow::{Result, bail};
use std::io::Write;
use streaktoe_core::{Match, Opponent, Player as Mark};
use tracing::{debug, info, instrument, warn};

/// How a call to [`Orchestrator::run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEnd {
    /// Played to a win or draw.
    Finished(Match),
    /// A player left before the end.
    Quit,
}

/// Drives matches between two players, writing everything to `out`.
pub struct Orchestrator<W: Write + Send> {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write + Send> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            player_x,
            player_o,
            out,
        }
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_out(self) -> W {
        self.out
    }

    /// The AI's mark must be played by a non-human seat and every other
    /// mark by a human, or streaks would credit the wrong side.
    fn check_seats(&self, game: &Match) -> Result<()> {
        let Some(ai) = game.ai_mark() else {
            return Ok(());
        };
        for (mark, player) in [(Mark::X, &self.player_x), (Mark::O, &self.player_o)] {
            if player.is_human() == (mark == ai) {
                bail!(
                    "{} cannot play {mark} in a match where the AI plays {ai}",
                    player.name()
                );
            }
        }
        Ok(())
    }

    fn names(&self) -> (String, String) {
        (
            self.player_x.name().to_string(),
            self.player_o.name().to_string(),
        )
    }

    /// Plays `game` to the end or until someone quits.
    ///
    /// Unreadable input and rejected moves are reported and the same
    /// player is asked again; the match is unchanged in between.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self, mut game: Match) -> Result<MatchEnd> {
        info!("Starting game orchestration");
        self.check_seats(&game)?;

        loop {
            writeln!(self.out, "\n{}\n", ui::render_board(game.board()))?;

            let Some(turn) = game.turn() else {
                let (name_x, name_o) = self.names();
                writeln!(self.out, "{}", ui::describe_outcome(game.outcome(), &name_x, &name_o))?;
                return Ok(MatchEnd::Finished(game));
            };

            let player = match turn {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if player.is_human() {
                write!(
                    self.out,
                    "{} ({turn}), choose a square (1-9 or a name, q to quit): ",
                    player.name()
                )?;
            } else {
                writeln!(self.out, "{} ({turn}) is thinking...", player.name())?;
            }
            self.out.flush()?;

            debug!(player = %player.name(), "Waiting for move");
            match player.get_move(&game).await? {
                MoveChoice::Play(index) => {
                    if let Err(e) = game.play(index) {
                        warn!(index, error = %e, "Move rejected");
                        writeln!(self.out, "Illegal move: {e}. Try again.")?;
                        writeln!(self.out, "{}", ui::render_open_squares(game.board()))?;
                    }
                }
                MoveChoice::Invalid(text) => {
                    writeln!(
                        self.out,
                        "Couldn't read {text:?}. Enter 1-9 or a name like \"top left\"."
                    )?;
                    writeln!(self.out, "{}", ui::render_open_squares(game.board()))?;
                }
                MoveChoice::Quit => {
                    info!(player = %player.name(), "Player quit");
                    writeln!(self.out, "{} left the game.", player.name())?;
                    return Ok(MatchEnd::Quit);
                }
            }
        }
    }

    /// Plays matches until someone quits or declines a rematch.
    ///
    /// Each finished match is recorded in `stats` and saved through `store`
    /// before the rematch prompt. Returns the number of finished matches.
    #[instrument(skip(self, input, store, stats))]
    pub async fn play_session(
        &mut self,
        opponent: Opponent,
        input: &LineInput,
        store: &StatsStore,
        stats: &mut StoredStats,
    ) -> Result<u32> {
        let mut game = Match::new(opponent);
        let mut finished = 0;

        loop {
            let done = match self.run(game).await? {
                MatchEnd::Quit => break,
                MatchEnd::Finished(done) => done,
            };
            finished += 1;

            stats.session.record(&done);
            store.save(stats)?;
            writeln!(self.out, "{}", ui::render_stats(stats))?;

            write!(self.out, "Play again? [y/N]: ")?;
            self.out.flush()?;
            let again = input
                .read_line()
                .await?
                .is_some_and(|line| matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"));
            if !again {
                break;
            }
            game = done.restart();
        }

        info!(finished, "Session over");
        Ok(finished)
    }
}
