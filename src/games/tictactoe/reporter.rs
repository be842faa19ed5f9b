//! Observer capability for game events.
//!
//! The controller never writes to an output sink. It describes what
//! happened as a [`GameEvent`] and hands it to whichever [`Reporter`] the
//! caller injected; adapters decide how (or whether) to show it.

use super::types::{Coordinate, Token};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Something observable that happened during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The named player is expected to move.
    Turn {
        /// Active player's name.
        player: String,
    },
    /// A token was placed.
    TokenDropped {
        /// Player who moved.
        player: String,
        /// Token placed.
        token: Token,
        /// Where it was placed.
        at: Coordinate,
    },
    /// The requested cell already holds a token.
    CellOccupied {
        /// Requested cell.
        at: Coordinate,
    },
    /// A move was made and no line is complete yet.
    NoWinnerYet,
    /// A player completed a line.
    Won {
        /// Winner's name.
        player: String,
        /// Winning token.
        token: Token,
    },
    /// The board filled up with no line.
    Draw,
    /// A move arrived after the game ended.
    GameOver,
    /// The board was cleared for a new game.
    Reset,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Turn { player } => write!(f, "{}'s turn", player),
            GameEvent::TokenDropped { player, token, at } => {
                write!(f, "{} placed {} at {}", player, token, at)
            }
            GameEvent::CellOccupied { at } => {
                write!(f, "The spot at {} is already taken, try again", at)
            }
            GameEvent::NoWinnerYet => write!(f, "No winner yet"),
            GameEvent::Won { player, token } => write!(f, "{} ({}) wins!", player, token),
            GameEvent::Draw => write!(f, "It's a draw!"),
            GameEvent::GameOver => write!(f, "The game is over, reset to play again"),
            GameEvent::Reset => write!(f, "Board cleared for a new game"),
        }
    }
}

/// Receives game events from the controller.
pub trait Reporter {
    /// Handles one event.
    fn report(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: &GameEvent) {}
}

/// Logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: &GameEvent) {
        info!(?event, "{}", event);
    }
}

/// Shared in-memory event recorder.
///
/// Clones share the same buffer: give one clone to the controller and keep
/// another to read the events back after each call.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Copies the recorded events without clearing them.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<GameEvent> {
        self.events.borrow().last().cloned()
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
