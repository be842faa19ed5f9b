//! Tic-tac-toe game core: board, rules and turn controller.

mod board;
mod controller;
mod error;
mod reporter;
pub mod rules;
mod types;

pub use board::{Board, Snapshot};
pub use controller::{
    DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameController, RoundOutcome, create_game,
};
pub use error::GameError;
pub use reporter::{EventLog, GameEvent, NullReporter, Reporter, TracingReporter};
pub use rules::{check_win, is_draw, is_full};
pub use types::{Cell, Coordinate, GameStatus, Mark, Player, SIZE, Token};
