//! Tests for the match state machine and evaluator scenarios.

use rand::SeedableRng;
use rand::rngs::StdRng;
use streaktoe_core::rules::evaluate;
use streaktoe_core::{
    Board, Difficulty, IllegalMove, InvalidMove, Match, MatchState, Opponent, Outcome, Player,
    Square,
};

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X O / O X O
    #[rustfmt::skip]
    let marks = [
        Player::X, Player::O, Player::X,
        Player::O, Player::X, Player::O,
        Player::O, Player::X, Player::O,
    ];
    let squares = marks.map(Square::Occupied);
    assert_eq!(evaluate(&Board::from_squares(squares)), Outcome::Draw);
}

#[test]
fn test_hot_seat_game_to_draw() {
    let mut game = Match::new(Opponent::Human);
    for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
        game.play(index).unwrap();
    }
    assert_eq!(game.state(), MatchState::Terminal { outcome: Outcome::Draw });
    assert_eq!(game.turn(), None);
}

#[test]
fn test_rejections_are_idempotent() {
    let mut game = Match::new(Opponent::ai(Difficulty::Exhaustive));
    let mut rng = StdRng::seed_from_u64(2);
    game.submit_move(4, &mut rng).unwrap();
    let taken = game.history()[1];
    let snapshot = game.clone();

    for _ in 0..3 {
        assert_eq!(
            game.submit_move(taken, &mut rng),
            Err(IllegalMove::Board(InvalidMove::Occupied(taken)))
        );
        assert_eq!(game, snapshot);
    }
}

#[test]
fn test_match_runs_to_completion_against_exhaustive() {
    let mut game = Match::new(Opponent::ai(Difficulty::Exhaustive));
    let mut rng = StdRng::seed_from_u64(4);
    while !game.is_over() {
        let index = game.board().empty_indices().next().unwrap();
        game.submit_move(index, &mut rng).unwrap();
    }
    assert_ne!(game.outcome(), Outcome::Win(Player::X));
    assert_eq!(game.submit_move(0, &mut rng), Err(IllegalMove::MatchOver));
}

#[test]
fn test_deferred_ai_move() {
    let mut game = Match::new(Opponent::ai(Difficulty::Heuristic));
    let mut rng = StdRng::seed_from_u64(8);

    assert_eq!(game.play(0), Ok(Outcome::Undecided));
    assert!(game.awaiting_ai());
    assert_eq!(game.submit_move(1, &mut rng), Err(IllegalMove::NotYourTurn));

    game.ai_move(&mut rng).unwrap();
    assert_eq!(game.turn(), Some(Player::X));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_ai_opens_as_x() {
    let mut game = Match::new(Opponent::Ai {
        mark: Player::X,
        difficulty: Difficulty::Exhaustive,
    });
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(game.human_mark(), Some(Player::O));

    game.ai_move(&mut rng).unwrap();
    assert_eq!(game.board().count(Player::X), 1);
    assert_eq!(game.turn(), Some(Player::O));
}

#[test]
fn test_current_board_is_a_snapshot() {
    let mut game = Match::new(Opponent::Human);
    let snapshot = game.current_board();
    game.play(4).unwrap();
    assert_eq!(snapshot, [Square::Empty; 9]);
    assert_eq!(game.current_board()[4], Square::Occupied(Player::X));
}

#[test]
fn test_match_serializes() {
    let mut game = Match::new(Opponent::ai(Difficulty::Random));
    game.play(4).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let restored: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
