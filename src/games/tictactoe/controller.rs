//! Turn order and terminal-state tracking.

use super::board::Board;
use super::error::GameError;
use super::reporter::{GameEvent, Reporter, TracingReporter};
use super::rules::{check_win, is_full};
use super::types::{Coordinate, GameStatus, Player, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Name used for player one when none is given.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";
/// Name used for player two when none is given.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// What a call to [`GameController::play_round`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Token placed, turn passed to the other player.
    Placed,
    /// Target cell was taken; nothing changed and the same player retries.
    CellOccupied,
    /// Token placed and it completed a line.
    Won(Token),
    /// Token placed and it filled the board without a line.
    Draw,
    /// The game had already ended; nothing changed.
    GameOver,
}

/// Creates a game with default names for missing or blank inputs.
///
/// Events go to a [`TracingReporter`].
#[instrument]
pub fn create_game(player_one: Option<&str>, player_two: Option<&str>) -> GameController {
    GameController::new(player_one, player_two, Box::new(TracingReporter))
}

fn name_or_default(name: Option<&str>, default: &str) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}

/// Orchestrates a single game session.
///
/// Owns the board exclusively. Player one always holds [`Token::X`] and
/// moves first, both after creation and after every [`reset`](Self::reset).
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: usize,
    status: GameStatus,
    reporter: Box<dyn Reporter>,
}

impl GameController {
    /// Creates a game reporting to `reporter`.
    ///
    /// Missing, empty or whitespace-only names fall back to
    /// [`DEFAULT_PLAYER_ONE`] and [`DEFAULT_PLAYER_TWO`].
    #[instrument(skip(reporter))]
    pub fn new(
        player_one: Option<&str>,
        player_two: Option<&str>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        let players = [
            Player::new(name_or_default(player_one, DEFAULT_PLAYER_ONE), Token::X),
            Player::new(name_or_default(player_two, DEFAULT_PLAYER_TWO), Token::O),
        ];
        info!(
            player_one = %players[0].name(),
            player_two = %players[1].name(),
            "Starting new game"
        );

        let mut game = Self {
            board: Board::new(),
            players,
            active: 0,
            status: GameStatus::InProgress,
            reporter,
        };
        game.announce_turn();
        game
    }

    /// Plays the active player's token at `(row, col)`.
    ///
    /// Out-of-range coordinates are an error and change nothing. An
    /// occupied cell or a finished game is reported through the returned
    /// [`RoundOutcome`], also without changing anything.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<RoundOutcome, GameError> {
        let at = Coordinate::new(row, col)?;
        Ok(self.play(at))
    }

    /// Plays the active player's token at a validated coordinate.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn play(&mut self, at: Coordinate) -> RoundOutcome {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move after game end ignored");
            self.reporter.report(&GameEvent::GameOver);
            return RoundOutcome::GameOver;
        }

        let player = self.players[self.active].clone();
        if !self.board.place(at, *player.token()) {
            self.reporter.report(&GameEvent::CellOccupied { at });
            self.announce_turn();
            return RoundOutcome::CellOccupied;
        }
        self.reporter.report(&GameEvent::TokenDropped {
            player: player.name().clone(),
            token: *player.token(),
            at,
        });

        if let Some(token) = check_win(&self.board, &self.players) {
            // Only the mover can complete a line in alternating play, so
            // the active player stays pointed at the winner.
            info!(winner = %player.name(), %token, "Game won");
            self.status = GameStatus::Won(token);
            self.reporter.report(&GameEvent::Won {
                player: self.player_for(token).name().clone(),
                token,
            });
            return RoundOutcome::Won(token);
        }

        if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
            self.reporter.report(&GameEvent::Draw);
            return RoundOutcome::Draw;
        }

        self.reporter.report(&GameEvent::NoWinnerYet);
        self.switch_player_turn();
        self.announce_turn();
        RoundOutcome::Placed
    }

    /// Clears the board and gives the first move back to player one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = 0;
        self.status = GameStatus::InProgress;
        self.reporter.report(&GameEvent::Reset);
        self.announce_turn();
    }

    /// The player whose move is expected, or the winner once won.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Checks whether a line was completed.
    pub fn is_game_won(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Checks whether the board filled up without a line.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Checks whether the game reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn switch_player_turn(&mut self) {
        self.active = 1 - self.active;
    }

    fn player_for(&self, token: Token) -> &Player {
        self.players
            .iter()
            .find(|player| *player.token() == token)
            .unwrap_or(&self.players[self.active])
    }

    fn announce_turn(&mut self) {
        let player = self.active_player().name().clone();
        self.reporter.report(&GameEvent::Turn { player });
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
