//! First-class player commands.
//!
//! A line of input becomes a [`Command`]: a [`Verb`] plus an optional
//! argument. Parsing is separate from execution so commands can be checked
//! and logged on their own.

use super::error::GameError;
use strum::IntoEnumIterator;
use tracing::instrument;

/// What the player wants to do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Describe the current room.
    Look,
    /// Walk to a connected room.
    Move,
    /// Return to the previous room.
    Back,
    /// Take an item from the current room.
    Pickup,
    /// List carried items.
    Inventory,
    /// Sort carried items by value.
    Sort,
    /// Inspect an item or puzzle in the current room.
    Inspect,
    /// Answer a puzzle in the current room.
    Solve,
    /// Search the reachable rooms for an item.
    Find,
    /// Print the room graph.
    Map,
    /// Show turn count and progress.
    Status,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Verb {
    /// Argument placeholder for verbs that take one.
    pub fn argument(self) -> Option<&'static str> {
        match self {
            Verb::Move => Some("room"),
            Verb::Pickup | Verb::Find => Some("item"),
            Verb::Inspect => Some("name"),
            Verb::Solve => Some("puzzle"),
            _ => None,
        }
    }

    /// One-line description for the help table.
    pub fn description(self) -> &'static str {
        match self {
            Verb::Look => "Look around current room",
            Verb::Move => "Move to a connected room",
            Verb::Back => "Go back to previous room",
            Verb::Pickup => "Pick up an item",
            Verb::Inventory => "Show your inventory",
            Verb::Sort => "Sort inventory by value",
            Verb::Inspect => "Inspect an item or puzzle",
            Verb::Solve => "Attempt to solve a puzzle",
            Verb::Find => "Search reachable rooms for an item",
            Verb::Map => "Show game map (recursive)",
            Verb::Status => "Show game status",
            Verb::Help => "Show this help",
            Verb::Quit => "Exit game",
        }
    }

    /// Message shown when an argument-taking verb arrives without one.
    pub fn usage(self) -> Option<&'static str> {
        match self {
            Verb::Move => Some("Move where? Usage: move <room name>"),
            Verb::Pickup => Some("Pickup what? Usage: pickup <item name>"),
            Verb::Inspect => Some("Inspect what? Usage: inspect <item/puzzle name>"),
            Verb::Solve => Some("Solve what? Usage: solve <puzzle name>"),
            Verb::Find => Some("Find what? Usage: find <item name>"),
            _ => None,
        }
    }

    /// Rows of the help table, one per verb.
    pub fn help_lines() -> Vec<String> {
        Verb::iter()
            .map(|verb| {
                let syntax = match verb.argument() {
                    Some(arg) => format!("{} <{}>", verb, arg),
                    None => verb.to_string(),
                };
                format!("{:<18}- {}", syntax, verb.description())
            })
            .collect()
    }
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: Verb,
    argument: Option<String>,
}

impl Command {
    /// Creates a command.
    pub fn new(verb: Verb, argument: Option<String>) -> Self {
        Self { verb, argument }
    }

    /// The verb.
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// The argument, if one was given.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Splits a line on its first space into verb and argument.
    ///
    /// The verb is matched case-insensitively. Surrounding whitespace on the
    /// argument is dropped and an all-blank argument counts as none.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCommand`] if the verb is unknown.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest.trim())),
            None => (line, None),
        };

        let verb = word
            .parse::<Verb>()
            .map_err(|_| GameError::InvalidCommand(word.to_lowercase()))?;
        let argument = rest.filter(|r| !r.is_empty()).map(str::to_string);

        Ok(Self { verb, argument })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.argument {
            Some(arg) => write!(f, "{} {}", self.verb, arg),
            None => write!(f, "{}", self.verb),
        }
    }
}
