//! Draw detection and overall status for tic-tac-toe.

use super::super::{Board, GameStatus};
use super::win::check_winner;

/// Checks whether the board is drawn: full with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Classifies the board as in progress, won, or drawn.
///
/// A winner takes precedence over a full board, so a ninth move that
/// completes a line is a win, not a draw.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
