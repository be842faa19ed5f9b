//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
#[instrument(skip(board, players))]
pub fn is_draw(board: &Board, players: &[Player]) -> bool {
    is_full(board) && check_win(board, players).is_none()
}
