//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player_two: Option<String>,

        /// File to write logs to while the terminal UI owns the screen
        #[arg(long, default_value = "tictactoe_tui.log")]
        log_file: PathBuf,
    },

    /// Play over stdin/stdout, one "<row> <col>" per line
    Console {
        /// Name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player_two: Option<String>,

        /// Write one JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },
}
