//! Error types for the game core.

use derive_more::{Display, Error};

/// Error returned by board and controller operations.
///
/// An occupied cell is not an error; it is reported through
/// [`RoundOutcome::CellOccupied`](super::RoundOutcome::CellOccupied) so
/// the same player can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({}, {}) is outside the 3x3 board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
