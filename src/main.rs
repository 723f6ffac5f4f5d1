//! Escape Room - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use escape_room::{GameConfig, GameEngine, GameOutcome, Transcript, escape_room};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_game(None, false),
        Some(Command::Play { config, no_banner }) => run_game(config, no_banner),
        Some(Command::Map) => print_map(),
    }
}

/// Play one session on stdin/stdout.
#[instrument]
fn run_game(config_path: Option<PathBuf>, no_banner: bool) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if no_banner {
        config = config.without_banner();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut engine = GameEngine::new(config, stdin.lock(), stdout.lock());

    let outcome = engine.run().context("Game session failed")?;
    match outcome {
        GameOutcome::Escaped { turns } => info!(turns, "Escaped"),
        GameOutcome::Quit { turns } => info!(turns, "Quit"),
        GameOutcome::InputClosed { turns } => info!(turns, "Input closed"),
    }

    Ok(())
}

/// Print the map outline of the built-in room layout.
#[instrument]
fn print_map() -> Result<()> {
    let world = escape_room();
    let mut out = Transcript::new();
    out.say("=== Game Map (Recursive) ===");
    world.explore(world.start(), 0, &mut out);
    out.flush_to(&mut std::io::stdout().lock())
        .context("Failed to write map")?;
    Ok(())
}
