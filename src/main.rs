//! Connect Four - terminal front end

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use connect_four::{GameConfig, run_interactive, run_replay};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command {
        Command::Play { no_color } => run_play(config.with_no_color_flag(no_color)),
        Command::Replay { json, columns } => {
            run_replay(config, json, &columns, io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting Connect Four");
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_interactive(config, stdin, stdout).context("Terminal I/O failed")?;
    Ok(())
}
