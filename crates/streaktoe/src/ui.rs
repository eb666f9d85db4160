//! Plain-text rendering for the terminal.

use crate::store::StoredStats;
use streaktoe_core::{Board, Outcome, Player, Position, Square};

/// Draws the board; empty squares show their keypad number.
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
pub fn render_board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                match board.get(pos) {
                    Some(Square::Occupied(mark)) => mark.to_string(),
                    _ => (pos + 1).to_string(),
                }
            })
            .collect();
        result.push_str(&format!(" {} ", cells.join(" | ")));
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// One-line description of how a match ended.
pub fn describe_outcome(outcome: Outcome, name_x: &str, name_o: &str) -> String {
    match outcome {
        Outcome::Win(Player::X) => format!("{name_x} (X) wins!"),
        Outcome::Win(Player::O) => format!("{name_o} (O) wins!"),
        Outcome::Draw => "It's a draw.".to_string(),
        Outcome::Undecided => "Game in progress.".to_string(),
    }
}

fn short_outcome(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::X) => "X",
        Outcome::Win(Player::O) => "O",
        Outcome::Draw => "draw",
        Outcome::Undecided => "?",
    }
}

/// Streaks, score and recent results.
pub fn render_stats(stats: &StoredStats) -> String {
    let streaks = stats.session.streaks();
    let score = stats.session.scoreboard();
    let name_x = stats.player_x.as_deref().unwrap_or("X");
    let name_o = stats.player_o.as_deref().unwrap_or("O");

    let recent: Vec<&str> = score.recent().iter().map(short_outcome).collect();
    let recent = if recent.is_empty() {
        "none yet".to_string()
    } else {
        recent.join(", ")
    };

    format!(
        "Win streak: {}   Unbeaten streak: {}\n\
         Score: {name_x} (X) {} - {} {name_o} (O), draws {}\n\
         Recent: {recent}",
        streaks.win_streak(),
        streaks.unbeaten_streak(),
        score.x_wins(),
        score.o_wins(),
        score.draws()
    )
}

/// Lists the squares still open, with their keypad numbers.
pub fn render_open_squares(board: &Board) -> String {
    let open: Vec<String> = Position::valid_moves(board)
        .into_iter()
        .map(|pos| format!("{pos} ({})", pos.to_index() + 1))
        .collect();
    format!("Open squares: {}", open.join(", "))
}
