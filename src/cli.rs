//! Command-line interface for escape_room.

use clap::{Parser, Subcommand};

/// Escape Room - find the keys, solve the puzzles, get out
#[derive(Parser, Debug)]
#[command(name = "escape_room")]
#[command(about = "Text-driven escape room", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game on stdin/stdout
    Play {
        /// Path to a TOML config file (hint cadence, prompt, banner)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Skip the welcome banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Print the room map and exit
    Map,
}
