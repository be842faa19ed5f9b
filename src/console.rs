//! Line-oriented console adapter.
//!
//! Reads commands from any [`BufRead`] and writes either human-readable
//! text or one JSON object per line to any [`Write`]. Useful for scripted
//! play and for piping games between programs.

use crate::games::tictactoe::{
    EventLog, GameController, GameError, GameEvent, GameStatus, Player, RoundOutcome, Snapshot,
};
use derive_more::{Display, Error};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Event messages followed by the rendered board.
    #[default]
    Text,
    /// One JSON object per processed line.
    Json,
}

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's token.
    Play {
        /// Row, 0 at the top.
        row: usize,
        /// Column, 0 at the left.
        col: usize,
    },
    /// Clear the board and start over.
    Reset,
    /// Print the board without playing.
    Board,
    /// Stop reading input.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command {:?}; expected '<row> <col>', 'reset', 'board' or 'quit'", input)]
pub struct ParseCommandError {
    /// The offending line.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Ok(Command::Reset),
            "board" | "b" => return Ok(Command::Board),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let err = || ParseCommandError {
            input: line.to_string(),
        };
        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => Ok(Command::Play {
                row: row.parse().map_err(|_| err())?,
                col: col.parse().map_err(|_| err())?,
            }),
            _ => Err(err()),
        }
    }
}

/// State written after each line in JSON mode.
#[derive(Debug, Serialize)]
struct StateView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<RoundOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    events: Vec<GameEvent>,
    board: Snapshot,
    status: GameStatus,
    active_player: &'a Player,
}

/// Console front end over a game controller.
pub struct Console<R, W> {
    input: R,
    output: W,
    game: GameController,
    events: EventLog,
    format: OutputFormat,
    auto_restart: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console game with the given player names.
    pub fn new(
        input: R,
        output: W,
        player_one: Option<&str>,
        player_two: Option<&str>,
        format: OutputFormat,
    ) -> Self {
        let events = EventLog::new();
        let game = GameController::new(player_one, player_two, Box::new(events.clone()));
        Self {
            input,
            output,
            game,
            events,
            format,
            auto_restart: false,
        }
    }

    /// Starts a new game right after one ends.
    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    /// The controller driving this session.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Processes input until end of input or `quit`.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        info!(format = ?self.format, "Console session started");
        self.emit(None, None)?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    warn!(error = %e, "Bad console input");
                    self.emit(None, Some(e.to_string()))?;
                }
            }
        }

        info!("Console session ended");
        self.output.flush()
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Play { row, col } => match self.game.play_round(row, col) {
                Ok(outcome) => {
                    let finished = matches!(outcome, RoundOutcome::Won(_) | RoundOutcome::Draw);
                    self.emit(Some(outcome), None)?;
                    if finished && self.auto_restart {
                        self.game.reset();
                        self.emit(None, None)?;
                    }
                    Ok(())
                }
                Err(e @ GameError::InvalidCoordinate { .. }) => self.emit(None, Some(e.to_string())),
            },
            Command::Reset => {
                self.game.reset();
                self.emit(None, None)
            }
            Command::Board | Command::Quit => self.emit(None, None),
        }
    }

    fn emit(&mut self, outcome: Option<RoundOutcome>, error: Option<String>) -> io::Result<()> {
        let events = self.events.drain();
        match self.format {
            OutputFormat::Text => {
                if let Some(error) = &error {
                    writeln!(self.output, "Error: {}", error)?;
                }
                for event in &events {
                    writeln!(self.output, "{}", event)?;
                }
                writeln!(self.output, "{}", self.game.board().render())?;
            }
            OutputFormat::Json => {
                let view = StateView {
                    outcome,
                    error,
                    events,
                    board: self.game.board().snapshot(),
                    status: self.game.status(),
                    active_player: self.game.active_player(),
                };
                serde_json::to_writer(&mut self.output, &view)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }
}
