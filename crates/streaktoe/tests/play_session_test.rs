//! End-to-end sessions driven by scripted input.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use streaktoe::{
    AiPlayer, HumanPlayer, LineInput, MatchEnd, Orchestrator, StatsStore, StoredStats,
};
use streaktoe_core::{Difficulty, Match, Opponent, Outcome, Player};

#[tokio::test]
async fn test_human_vs_exhaustive_never_wins() {
    // Trying every square in order always finishes the match.
    let input = LineInput::from_reader(&b"5\n1\n2\n3\n4\n6\n7\n8\n9\n"[..]);
    let mut orch = Orchestrator::new(
        Box::new(HumanPlayer::new("Ada", input)),
        Box::new(AiPlayer::new(
            "Bot",
            Difficulty::Exhaustive,
            Duration::ZERO,
            StdRng::seed_from_u64(9),
        )),
        Vec::new(),
    );

    let end = orch
        .run(Match::new(Opponent::ai(Difficulty::Exhaustive)))
        .await
        .unwrap();
    let MatchEnd::Finished(game) = end else {
        panic!("expected a finished match");
    };
    assert_ne!(game.outcome(), Outcome::Win(Player::X));
    assert!(game.is_over());
}

#[tokio::test]
async fn test_session_records_and_persists_each_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));
    let mut stats = StoredStats::default();

    // X wins the top row twice, accepting one rematch.
    let input = LineInput::from_reader(&b"1\n4\n2\n5\n3\ny\n1\n4\n2\n5\n3\nn\n"[..]);
    let mut orch = Orchestrator::new(
        Box::new(HumanPlayer::new("Ada", input.clone())),
        Box::new(HumanPlayer::new("Bea", input.clone())),
        Vec::new(),
    );

    let finished = orch
        .play_session(Opponent::Human, &input, &store, &mut stats)
        .await
        .unwrap();
    assert_eq!(finished, 2);

    let loaded = store.load().unwrap();
    assert_eq!(*loaded.session.scoreboard().x_wins(), 2);
    // Hot-seat matches do not move streaks.
    assert_eq!(*loaded.session.streaks().win_streak(), 0);

    let text = String::from_utf8(orch.into_out()).unwrap();
    assert!(text.contains("Play again? [y/N]"));
}

#[tokio::test]
async fn test_quit_mid_match_records_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));
    let mut stats = StoredStats::default();

    let input = LineInput::from_reader(&b"5\nquit\n"[..]);
    let mut orch = Orchestrator::new(
        Box::new(HumanPlayer::new("Ada", input.clone())),
        Box::new(HumanPlayer::new("Bea", input.clone())),
        Vec::new(),
    );

    let finished = orch
        .play_session(Opponent::Human, &input, &store, &mut stats)
        .await
        .unwrap();
    assert_eq!(finished, 0);
    assert!(!dir.path().join("stats.json").exists());
}

#[tokio::test]
async fn test_ai_self_play_exhaustive_draws() {
    let mut orch = Orchestrator::new(
        Box::new(AiPlayer::new(
            "X",
            Difficulty::Exhaustive,
            Duration::ZERO,
            StdRng::seed_from_u64(1),
        )),
        Box::new(AiPlayer::new(
            "O",
            Difficulty::Exhaustive,
            Duration::ZERO,
            StdRng::seed_from_u64(2),
        )),
        std::io::sink(),
    );

    let end = orch.run(Match::new(Opponent::Human)).await.unwrap();
    let MatchEnd::Finished(game) = end else {
        panic!("expected a finished match");
    };
    assert_eq!(game.outcome(), Outcome::Draw);
}
