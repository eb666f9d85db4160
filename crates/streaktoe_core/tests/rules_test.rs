//! Evaluator consistency over every board reachable in play.

use std::collections::HashSet;
use streaktoe_core::rules::{LINES, check_winner, evaluate, is_draw};
use streaktoe_core::{Board, Outcome, Player, Square};

/// Every position reachable from the empty board, terminal ones included.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, turn: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) || evaluate(&board).is_terminal() {
            return;
        }
        for index in board.empty_indices() {
            let mut next = board;
            next.set(index, turn).unwrap();
            walk(next, turn.opponent(), seen);
        }
    }
    let mut seen = HashSet::new();
    walk(Board::new(), Player::X, &mut seen);
    seen
}

fn has_line(board: &Board, mark: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(mark))))
}

#[test]
fn test_reachable_position_count() {
    // 5478 distinct legal positions, the empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_exactly_one_outcome_on_every_reachable_board() {
    let boards = reachable_boards();
    let mut terminal = 0;

    for board in &boards {
        let winner = check_winner(board);
        let draw = is_draw(board);
        assert!(!(draw && winner.is_some()), "both a win and a draw on {board:?}");

        let expected = match (winner, draw) {
            (Some(mark), _) => Outcome::Win(mark),
            (None, true) => Outcome::Draw,
            (None, false) => Outcome::Undecided,
        };
        assert_eq!(evaluate(board), expected, "evaluator disagrees on {board:?}");

        if expected == Outcome::Undecided {
            assert!(!board.is_full(), "undecided full board {board:?}");
        } else {
            terminal += 1;
        }
    }

    // The walk really reaches wins and draws, not just open positions.
    assert!(terminal > 0);
    assert!(boards.iter().any(is_draw));
}

#[test]
fn test_never_two_winners_on_reachable_boards() {
    for board in reachable_boards() {
        assert!(
            !(has_line(&board, Player::X) && has_line(&board, Player::O)),
            "both marks have a line on {board:?}"
        );
        if let Some(winner) = check_winner(&board) {
            assert!(has_line(&board, winner));
        }
    }
}
