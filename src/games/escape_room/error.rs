//! Error types for the escape room.

use derive_more::{Display, Error};
use tracing::instrument;

/// Recoverable errors raised by player commands.
///
/// All three are caught at the command-dispatch boundary, shown to the
/// player, and the loop carries on. Missing rooms, items and puzzles are
/// not errors; they are reported as plain messages.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The first word of the input is not a known command.
    #[display("Unknown command: {_0}. Type 'help' for available commands.")]
    InvalidCommand(String),

    /// A blank answer was submitted to a puzzle.
    #[display("{reason}")]
    InvalidPuzzleAnswer {
        /// Message shown to the player.
        reason: String,
    },

    /// The target room needs a key the player does not carry.
    #[display("This room is locked! You need: {key}")]
    LockedRoom {
        /// Room the player tried to enter.
        room: String,
        /// Name of the key item that opens it.
        key: String,
    },
}

impl std::error::Error for GameError {}

/// Failure on the engine's input or output stream.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", message, file, line)]
pub struct EngineError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for EngineError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_room_names_the_key() {
        let err = GameError::LockedRoom {
            room: "Treasury".to_string(),
            key: "Gold Key".to_string(),
        };
        assert_eq!(err.to_string(), "This room is locked! You need: Gold Key");
    }

    #[test]
    fn io_errors_record_location() {
        let err = EngineError::from(std::io::Error::other("pipe closed"));
        assert!(err.message.contains("pipe closed"));
        assert!(err.file.ends_with("error.rs"));
    }
}
