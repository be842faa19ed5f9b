//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Core** (`games::tictactoe`): board, win/draw rules and the turn
//!   controller. No I/O; events go to an injected [`Reporter`].
//! - **TUI** ([`tui`]): ratatui front end with name entry and keyboard play.
//! - **Console** ([`console`]): line-oriented front end with text or JSON
//!   output.
//!
//! # Example
//!
//! ```
//! use tictactoe::{create_game, RoundOutcome, Token};
//!
//! let mut game = create_game(Some("Ada"), Some("Grace"));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     assert_eq!(game.play_round(row, col)?, RoundOutcome::Placed);
//! }
//! assert_eq!(game.play_round(0, 2)?, RoundOutcome::Won(Token::X));
//! assert!(game.is_game_won());
//! assert_eq!(game.active_player().name(), "Ada");
//! # Ok::<(), tictactoe::GameError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod games;

pub mod console;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Game core
pub use games::tictactoe::{
    Board, Cell, Coordinate, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, EventLog, GameController,
    GameError, GameEvent, GameStatus, Mark, NullReporter, Player, Reporter, RoundOutcome, SIZE,
    Snapshot, Token, TracingReporter, check_win, create_game, is_draw, is_full,
};
