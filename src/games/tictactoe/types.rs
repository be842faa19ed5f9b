//! Core domain types for tic-tac-toe.

use super::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Token a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Token {
    /// Held by player one, moves first.
    X,
    /// Held by player two.
    O,
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// No token yet.
    #[default]
    Empty,
    /// Cell holds a token.
    Occupied(Token),
}

impl Mark {
    /// Returns the token in this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(token) => Some(token),
        }
    }

    /// Checks whether the cell holds no token.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::Occupied(token) => write!(f, "{}", token),
        }
    }
}

/// One square of the board.
///
/// Starts empty and only changes through [`Cell::add_token`] or
/// [`Cell::clear`]; the board owning it decides when that is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    mark: Mark,
}

impl Cell {
    /// Returns the current mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub(super) fn add_token(&mut self, token: Token) {
        self.mark = Mark::Occupied(token);
    }

    pub(super) fn clear(&mut self) {
        self.mark = Mark::Empty;
    }
}

/// A validated board coordinate.
///
/// Row 0 is the top row, column 0 the left-most column. Deserializing
/// goes through [`Coordinate::new`], so out-of-range input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Coordinate`].
#[derive(Deserialize)]
struct RawCoordinate {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GameError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col)
    }
}

impl Coordinate {
    /// The middle cell.
    pub const CENTER: Coordinate = Coordinate { row: 1, col: 1 };

    /// Creates a coordinate, failing when either axis is outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Maps a flat row-major index (0-8) to a coordinate.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        if index >= SIZE * SIZE {
            return Err(GameError::InvalidCoordinate {
                row: index / SIZE,
                col: index % SIZE,
            });
        }
        Ok(Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Flat row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

/// Player in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Token this player places.
    token: Token,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A line was completed by the given token.
    Won(Token),
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// Checks whether the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(2, 2).is_ok());
        assert_eq!(
            Coordinate::new(3, 0),
            Err(GameError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert!(Coordinate::new(0, 3).is_err());
    }

    #[test]
    fn test_from_index_row_major() {
        let coord = Coordinate::from_index(5).unwrap();
        assert_eq!((coord.row(), coord.col()), (1, 2));
        assert_eq!(coord.index(), 5);
        assert!(Coordinate::from_index(9).is_err());
    }

    #[test]
    fn test_all_coordinates_in_order() {
        let indices: Vec<_> = Coordinate::all().map(Coordinate::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_cell_lifecycle() {
        let mut cell = Cell::default();
        assert!(cell.mark().is_empty());
        cell.add_token(Token::O);
        assert_eq!(cell.mark(), Mark::Occupied(Token::O));
        cell.clear();
        assert_eq!(cell.mark(), Mark::Empty);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::X.to_string(), "X");
        assert_eq!(Mark::Occupied(Token::O).to_string(), "O");
        assert_eq!(Mark::Occupied(Token::O).token(), Some(Token::O));
        assert_eq!(Mark::Empty.token(), None);
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let coord: Coordinate = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(coord, Coordinate::new(2, 1).unwrap());

        let err = serde_json::from_str::<Coordinate>(r#"{"row":7,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("Coordinate (7, 0) is outside the 3x3 board"));
        assert!(serde_json::from_str::<Coordinate>(r#"{"row":0,"col":3}"#).is_err());
    }
}
