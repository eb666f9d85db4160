//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};

/// The 8 winning lines as index triples: rows, columns, then diagonals.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.set(i, Player::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for i in [2, 4, 6] {
            board.set(i, Player::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(0, Player::X).unwrap();
        board.set(1, Player::X).unwrap();
        board.set(2, Player::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
