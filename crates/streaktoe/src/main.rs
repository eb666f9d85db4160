//! Streaktoe - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use streaktoe::cli::{Cli, Command};
use streaktoe::{
    AiPlayer, GameConfig, HumanPlayer, LineInput, MatchEnd, Orchestrator, Player, StatsStore,
    ui,
};
use streaktoe_core::{Difficulty, Match, Opponent, Player as Mark, Scoreboard};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config =
        GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play {
            difficulty,
            hot_seat,
            ai_first,
            delay_ms,
            player_x,
            player_o,
            stats,
            seed,
        } => {
            let config = config
                .with_difficulty(difficulty)
                .with_ai_first(ai_first)
                .with_ai_delay_ms(delay_ms)
                .with_names(player_x, player_o)
                .with_stats_path(stats);
            run_play(config, hot_seat, seed).await
        }
        Command::Stats { stats } => run_stats(config.with_stats_path(stats)),
        Command::ResetScore { stats } => run_reset_score(config.with_stats_path(stats)),
        Command::SelfPlay { x, o, games, seed } => run_self_play(x, o, games, seed).await,
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Interactive play against the AI or hot-seat.
#[instrument(skip(config), fields(difficulty = %config.difficulty()))]
async fn run_play(config: GameConfig, hot_seat: bool, seed: Option<u64>) -> Result<()> {
    let store = StatsStore::new(config.stats_path());
    let mut stats = store.load().context("Failed to load statistics")?;
    let input = LineInput::stdin();
    let difficulty = *config.difficulty();

    let opponent = if hot_seat {
        Opponent::Human
    } else if *config.ai_first() {
        Opponent::Ai {
            mark: Mark::X,
            difficulty,
        }
    } else {
        Opponent::ai(difficulty)
    };

    let name_x = config.player_name(Mark::X, stats.name(Mark::X));
    let name_o = config.player_name(Mark::O, stats.name(Mark::O));
    stats.remember_names(opponent, &name_x, &name_o);

    let human = |name: &String| -> Box<dyn Player> {
        Box::new(HumanPlayer::new(name.clone(), input.clone()))
    };
    let ai = || -> Box<dyn Player> {
        Box::new(AiPlayer::new(
            format!("Computer ({difficulty})"),
            difficulty,
            Duration::from_millis(*config.ai_delay_ms()),
            make_rng(seed),
        ))
    };
    let (player_x, player_o) = match opponent {
        Opponent::Human => (human(&name_x), human(&name_o)),
        Opponent::Ai { mark: Mark::X, .. } => (ai(), human(&name_o)),
        Opponent::Ai { mark: Mark::O, .. } => (human(&name_x), ai()),
    };

    info!(?opponent, "Starting play session");
    let mut orchestrator = Orchestrator::new(player_x, player_o, std::io::stdout());
    let finished = orchestrator
        .play_session(opponent, &input, &store, &mut stats)
        .await?;

    println!("Thanks for playing! ({finished} game(s) finished)");
    Ok(())
}

/// Prints persisted statistics.
fn run_stats(config: GameConfig) -> Result<()> {
    let stats = StatsStore::new(config.stats_path())
        .load()
        .context("Failed to load statistics")?;
    println!("{}", ui::render_stats(&stats));
    Ok(())
}

/// Clears the scoreboard; streaks survive.
fn run_reset_score(config: GameConfig) -> Result<()> {
    let store = StatsStore::new(config.stats_path());
    let mut stats = store.load()?;
    stats.session.reset_score();
    store.save(&stats).context("Failed to save statistics")?;
    println!("Score reset. Stats file: {}", store.path().display());
    Ok(())
}

/// Plays AI against AI and prints the tally.
#[instrument]
async fn run_self_play(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(AiPlayer::new(
            format!("X ({x})"),
            x,
            Duration::ZERO,
            make_rng(seed),
        )),
        Box::new(AiPlayer::new(
            format!("O ({o})"),
            o,
            Duration::ZERO,
            make_rng(seed.map(|s| s.wrapping_add(1))),
        )),
        std::io::sink(),
    );

    let mut tally = Scoreboard::new();
    for _ in 0..games {
        if let MatchEnd::Finished(game) = orchestrator.run(Match::new(Opponent::Human)).await? {
            tally.record(game.outcome());
        }
    }

    println!(
        "{games} games: X ({x}) won {}, O ({o}) won {}, draws {}",
        tally.x_wins(),
        tally.o_wins(),
        tally.draws()
    );
    Ok(())
}
