//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player, SIZE, Token};
use tracing::instrument;

type Line = [(usize, usize); SIZE];

const ROWS: [Line; SIZE] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
];

const COLUMNS: [Line; SIZE] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

const DIAGONALS: [Line; 2] = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];

/// Checks whether any player has completed a line.
///
/// Tokens are tried in player order; for each token rows are checked
/// before columns and columns before diagonals. The first complete line
/// decides the result, so a board where both tokens have a line always
/// reports the earlier player. A full board without a line is `None`;
/// draws are detected separately by [`is_draw`](super::is_draw).
#[instrument(skip(board, players))]
pub fn check_win(board: &Board, players: &[Player]) -> Option<Token> {
    let snapshot = board.snapshot();
    players.iter().map(|player| *player.token()).find(|&token| {
        ROWS.iter()
            .chain(COLUMNS.iter())
            .chain(DIAGONALS.iter())
            .any(|line| {
                line.iter()
                    .all(|&(row, col)| snapshot[row][col] == Mark::Occupied(token))
            })
    })
}
