//! Tests for winner detection on standalone boards.

use tictactoe_history::rules::{LINES, winning_line};
use tictactoe_history::{Board, Player, calculate_winner, is_full};

#[test]
fn test_each_line_for_each_player() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let board = line
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
            assert_eq!(calculate_winner(&board), Some(player));
        }
    }
}

#[test]
fn test_two_of_three_never_wins() {
    for line in LINES {
        let board = line[..2]
            .iter()
            .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::X));
        assert_eq!(calculate_winner(&board), None);
    }
}

#[test]
fn test_lines_are_evaluated_rows_then_columns_then_diagonals() {
    // Bottom row and right column both X: the row comes first.
    let board: Board = "..X..XXXX".parse().unwrap();
    let (player, line) = winning_line(&board).unwrap();
    assert_eq!(player, Player::X);
    assert_eq!(line, LINES[2]);

    // Left column O and right column X: left is checked first.
    let board: Board = "O.XO.XO.X".parse().unwrap();
    let (player, line) = winning_line(&board).unwrap();
    assert_eq!(player, Player::O);
    assert_eq!(line, LINES[3]);
}

#[test]
fn test_full_board_without_line_is_indistinguishable_from_in_progress() {
    let drawn: Board = "XOXXOOOXX".parse().unwrap();
    assert!(is_full(&drawn));
    assert_eq!(calculate_winner(&drawn), None);
    assert_eq!(calculate_winner(&Board::new()), None);
}
