//! Tic-tac-toe - command-line entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tictactoe::Config;
use tictactoe::console::{Console, OutputFormat};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui {
            player_one,
            player_two,
            log_file,
        } => {
            initialize_tui_tracing(&log_file)?;
            let config = Config::load_or_default(&cli.config)?.with_names(player_one, player_two);
            tictactoe::tui::run_tui(&config)
        }
        Command::Console {
            player_one,
            player_two,
            json,
        } => {
            initialize_console_tracing();
            let config = Config::load_or_default(&cli.config)?.with_names(player_one, player_two);
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            run_console(&config, format)
        }
    }
}

/// Run a console game on stdin/stdout
#[instrument(skip(config))]
fn run_console(config: &Config, format: OutputFormat) -> Result<()> {
    info!("Starting console game");
    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout().lock(),
        config.player_one().as_deref(),
        config.player_two().as_deref(),
        format,
    )
    .with_auto_restart(*config.auto_restart());
    console.run()?;
    Ok(())
}

fn initialize_tui_tracing(log_file: &Path) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    info!(log_file = %log_file.display(), "TUI logging initialized");
    Ok(())
}

fn initialize_console_tracing() {
    // stderr keeps stdout free for game output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
