//! Command-line interface for connect_four.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Connect Four - two players, one console
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Two-player Connect Four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on this terminal
    Play {
        /// Disable coloured pieces
        #[arg(long)]
        no_color: bool,
    },

    /// Play a fixed list of moves and report the result
    Replay {
        /// Emit notifications as JSON lines instead of drawing the board
        #[arg(long)]
        json: bool,

        /// Column numbers (1-7), player 1 first
        #[arg(required = true, value_delimiter = ',')]
        columns: Vec<usize>,
    },
}
