//! The nameable, inspectable capability shared by everything in the world.

use super::item::Item;
use super::puzzle::Puzzle;
use super::transcript::Transcript;
use super::world::World;

/// Anything the player can refer to by name and look at.
pub trait GameComponent {
    /// Display name, matched case-insensitively by player commands.
    fn name(&self) -> &str;

    /// Writes a description to the player-facing output.
    ///
    /// The world is passed so that rooms can describe their exits.
    fn inspect(&self, world: &World, out: &mut Transcript);

    /// Case-insensitive name comparison.
    fn is_named(&self, name: &str) -> bool {
        same_name(self.name(), name.trim())
    }
}

/// Case-insensitive comparison used for every player-typed name and answer.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Something placed inside a room.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Content {
    /// A collectible item.
    Item(Item),
    /// A puzzle fixed to the room.
    Puzzle(Puzzle),
}

impl Content {
    /// Returns the item, if this is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Content::Item(item) => Some(item),
            Content::Puzzle(_) => None,
        }
    }

    /// Returns the puzzle, if this is one.
    pub fn as_puzzle(&self) -> Option<&Puzzle> {
        match self {
            Content::Puzzle(puzzle) => Some(puzzle),
            Content::Item(_) => None,
        }
    }

    /// Returns the puzzle mutably, if this is one.
    pub fn as_puzzle_mut(&mut self) -> Option<&mut Puzzle> {
        match self {
            Content::Puzzle(puzzle) => Some(puzzle),
            Content::Item(_) => None,
        }
    }
}

impl GameComponent for Content {
    fn name(&self) -> &str {
        match self {
            Content::Item(item) => GameComponent::name(item),
            Content::Puzzle(puzzle) => GameComponent::name(puzzle),
        }
    }

    fn inspect(&self, world: &World, out: &mut Transcript) {
        match self {
            Content::Item(item) => item.inspect(world, out),
            Content::Puzzle(puzzle) => puzzle.inspect(world, out),
        }
    }
}
