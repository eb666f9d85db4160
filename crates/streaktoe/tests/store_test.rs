//! Tests for statistics persistence.

use streaktoe::{GameConfig, StatsStore, StoredStats};
use streaktoe_core::{Difficulty, Match, Opponent, Outcome, Player};

fn finished_match() -> Match {
    let mut game = Match::new(Opponent::ai(Difficulty::Random));
    for index in [0, 3, 1, 4, 2] {
        game.play(index).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
    game
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));
    assert_eq!(store.load().unwrap(), StoredStats::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));

    let mut stats = StoredStats {
        player_x: Some("Ada".to_string()),
        ..StoredStats::default()
    };
    assert!(stats.session.record(&finished_match()));
    store.save(&stats).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, stats);
    assert_eq!(*loaded.session.streaks().win_streak(), 1);
    assert_eq!(*loaded.session.scoreboard().x_wins(), 1);
    assert!(!dir.path().join("stats.json.tmp").exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = StatsStore::new(&path).load().unwrap_err();
    assert!(err.message.contains("JSON error"));
}

#[test]
fn test_reset_score_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));

    let mut stats = StoredStats::default();
    stats.session.record(&finished_match());
    stats.session.reset_score();
    store.save(&stats).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.session.scoreboard().total(), 0);
    assert_eq!(*loaded.session.streaks().win_streak(), 1);
}

#[test]
fn test_stored_names_restored_on_next_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("stats.json"));

    let mut stats = StoredStats::default();
    stats.remember_names(Opponent::ai(Difficulty::Exhaustive), "Ada", "Computer (exhaustive)");
    store.save(&stats).unwrap();

    let loaded = store.load().unwrap();
    let config = GameConfig::default();
    assert_eq!(config.player_name(Player::X, loaded.name(Player::X)), "Ada");
    assert_eq!(config.player_name(Player::O, loaded.name(Player::O)), "Player O");
}

#[test]
fn test_ai_label_never_stored() {
    let mut stats = StoredStats {
        player_x: Some("Ada".to_string()),
        ..StoredStats::default()
    };
    let ai_first = Opponent::Ai {
        mark: Player::X,
        difficulty: Difficulty::Exhaustive,
    };
    stats.remember_names(ai_first, "Computer (exhaustive)", "Bea");

    assert_eq!(stats.name(Player::X), Some("Ada"));
    assert_eq!(stats.name(Player::O), Some("Bea"));

    stats.remember_names(Opponent::Human, "Cy", "Di");
    assert_eq!(stats.name(Player::X), Some("Cy"));
    assert_eq!(stats.name(Player::O), Some("Di"));
}
