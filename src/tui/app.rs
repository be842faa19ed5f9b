//! Application state and logic.

use super::input::{digit_to_coordinate, move_cursor};
use crate::games::tictactoe::{
    Coordinate, EventLog, GameController, GameEvent, GameStatus, RoundOutcome,
};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Name-entry form shown before the first game.
#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    fields: [String; 2],
    focus: usize,
}

impl NameEntry {
    /// Text typed so far for player one and player two.
    pub fn fields(&self) -> &[String; 2] {
        &self.fields
    }

    /// Index of the field receiving keystrokes.
    pub fn focus(&self) -> usize {
        self.focus
    }
}

/// Which screen is active.
#[derive(Debug)]
pub enum Screen {
    /// Collecting the two player names.
    Names(NameEntry),
    /// A game is running.
    Playing(GameController),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    cursor: Coordinate,
    events: EventLog,
    status_message: String,
    auto_restart: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application on the name-entry screen.
    ///
    /// Names from the configuration pre-fill the form.
    pub fn new(player_one: Option<String>, player_two: Option<String>, auto_restart: bool) -> Self {
        let entry = NameEntry {
            fields: [player_one.unwrap_or_default(), player_two.unwrap_or_default()],
            focus: 0,
        };
        Self {
            screen: Screen::Names(entry),
            cursor: Coordinate::CENTER,
            events: EventLog::new(),
            status_message: "Enter player names, Tab to switch, Enter to start".to_string(),
            auto_restart,
            should_quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match &mut self.screen {
            Screen::Names(entry) => match key {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    entry.focus = 1 - entry.focus;
                }
                KeyCode::Backspace => {
                    entry.fields[entry.focus].pop();
                }
                KeyCode::Char(c) => entry.fields[entry.focus].push(c),
                KeyCode::Enter if entry.focus == 0 => entry.focus = 1,
                KeyCode::Enter => self.start_game(),
                _ => {}
            },
            Screen::Playing(game) => match key {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') if game.is_over() => {
                    game.reset();
                    self.refresh_status();
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
                KeyCode::Char(c) => {
                    if let Some(at) = digit_to_coordinate(c) {
                        self.cursor = at;
                        self.play_at(at);
                    }
                }
                other => self.cursor = move_cursor(self.cursor, other),
            },
        }
    }

    fn start_game(&mut self) {
        let Screen::Names(entry) = &self.screen else {
            return;
        };
        let game = GameController::new(
            Some(entry.fields[0].as_str()),
            Some(entry.fields[1].as_str()),
            Box::new(self.events.clone()),
        );
        info!(players = ?game.players(), "Game started from TUI");
        self.screen = Screen::Playing(game);
        self.refresh_status();
    }

    fn play_at(&mut self, at: Coordinate) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        let outcome = game.play(at);
        debug!(?outcome, %at, "Round played");
        if self.auto_restart && matches!(outcome, RoundOutcome::Won(_) | RoundOutcome::Draw) {
            let result = self.events.last().map(|event| event.to_string());
            game.reset();
            self.refresh_status();
            if let Some(result) = result {
                self.status_message = format!("{} New game: {}", result, self.status_message);
            }
            return;
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let events = self.events.drain();
        let Screen::Playing(game) = &self.screen else {
            return;
        };
        let notice = events
            .iter()
            .find(|event| matches!(event, GameEvent::CellOccupied { .. }))
            .map(ToString::to_string);
        let player = game.active_player();

        self.status_message = match game.status() {
            GameStatus::Won(token) => {
                format!(
                    "{} ({}) wins! Press 'r' to play again or 'q' to quit.",
                    player.name(),
                    token
                )
            }
            GameStatus::Draw => "It's a draw! Press 'r' to play again or 'q' to quit.".to_string(),
            GameStatus::InProgress => {
                let turn = format!("{}'s turn ({})", player.name(), player.token());
                match notice {
                    Some(notice) => format!("{}. {}", notice, turn),
                    None => turn,
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Token};

    fn playing_app(auto_restart: bool) -> App {
        let mut app = App::new(Some("Ada".into()), Some("Grace".into()), auto_restart);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        app
    }

    fn game(app: &App) -> &GameController {
        match app.screen() {
            Screen::Playing(game) => game,
            Screen::Names(_) => panic!("expected a running game"),
        }
    }

    #[test]
    fn test_name_entry() {
        let mut app = App::new(None, None, false);
        for c in "Al".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Enter);

        let game = game(&app);
        assert_eq!(game.players()[0].name(), "A");
        assert_eq!(game.players()[1].name(), "Player Two");
        assert_eq!(app.status_message(), "A's turn (X)");
    }

    #[test]
    fn test_digit_keys_play_rounds() {
        let mut app = playing_app(false);
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(game(&app).board().get_cell(1, 1), Ok(Mark::Occupied(Token::X)));
        assert_eq!(app.status_message(), "Grace's turn (O)");
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut app = playing_app(false);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));

        assert_eq!(*game(&app).active_player().token(), Token::O);
        assert!(app.status_message().contains("already taken"));
        assert!(app.status_message().ends_with("Grace's turn (O)"));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = playing_app(false);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);

        assert_eq!(game(&app).board().get_cell(0, 0), Ok(Mark::Occupied(Token::X)));
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = playing_app(false);
        for key in ['1', '5', '2', '4', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(game(&app).is_game_won());
        assert!(app.status_message().starts_with("Ada (X) wins!"));

        // Moves are ignored until reset.
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(game(&app).board().get_cell(2, 2), Ok(Mark::Empty));

        app.handle_key(KeyCode::Char('r'));
        assert!(!game(&app).is_over());
        assert_eq!(game(&app).board().empty_cells().len(), 9);
        assert_eq!(app.status_message(), "Ada's turn (X)");
    }

    #[test]
    fn test_auto_restart() {
        let mut app = playing_app(true);
        for key in ['1', '5', '2', '4', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(!game(&app).is_over());
        assert_eq!(game(&app).board().empty_cells().len(), 9);
        assert_eq!(
            app.status_message(),
            "Ada (X) wins! New game: Ada's turn (X)"
        );
    }

    #[test]
    fn test_quit() {
        let mut app = playing_app(false);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
