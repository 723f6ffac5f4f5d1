//! Escape Room library - a text-driven escape room simulator.
//!
//! The player walks a small graph of rooms, picks up items, answers riddles
//! and code locks for keys, and unlocks their way to the exit.
//!
//! # Architecture
//!
//! - **World**: arena of rooms addressed by [`RoomId`], with cycle-safe
//!   recursive queries (map outline, item search, depth)
//! - **Player**: current room, move history and inventory
//! - **Puzzles**: riddles and code locks that hand out a reward exactly once
//! - **Engine**: the command loop, reading from any `BufRead` and writing to
//!   any `Write`
//!
//! # Example
//!
//! ```
//! use escape_room::{GameConfig, GameEngine, GameOutcome};
//!
//! let script = "move secret corridor\nquit\n";
//! let mut output = Vec::new();
//! let outcome = GameEngine::new(GameConfig::default(), script.as_bytes(), &mut output)
//!     .run()?;
//! assert_eq!(outcome, GameOutcome::Quit { turns: 2 });
//! # Ok::<(), escape_room::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Escape room
pub use games::escape_room::{
    Command, Content, EngineError, GameComponent, GameEngine, GameError, GameOutcome, HINTS, Item,
    ItemKind, Player, Puzzle, PuzzleKind, Room, RoomId, Transcript, Verb, World, default_hints,
    escape_room,
};
