//! Terminal UI adapter.
//!
//! Collects the two player names, then renders the board with ratatui and
//! forwards key presses to the game controller.

mod app;
mod input;
mod ui;

pub use app::{App, NameEntry, Screen};
pub use input::{digit_to_coordinate, move_cursor};
pub use ui::draw;

use crate::config::Config;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Runs the terminal UI until the user quits.
///
/// Expects tracing to be routed away from stdout already; anything written
/// there would corrupt the screen.
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(
        config.player_one().clone(),
        config.player_two().clone(),
        *config.auto_restart(),
    );
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

/// Runs its restore step when dropped, whichever way setup or the loop exits.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn enter_screen() -> io::Result<()> {
        Err(io::Error::other("no terminal attached"))
    }

    fn failing_setup(restored: &Cell<u32>) -> io::Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        enter_screen()?;
        Ok(())
    }

    #[test]
    fn test_guard_restores_after_failed_setup() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
