//! Rooms: the nodes of the world graph.

use super::component::{Content, GameComponent};
use super::item::Item;
use super::puzzle::Puzzle;
use super::transcript::Transcript;
use super::world::World;
use tracing::{debug, instrument};

/// Index of a room in its [`World`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
)]
#[display("room#{_0}")]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// Position of the room in the world arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A room: its contents, its outgoing edges and an optional lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    is_exit: bool,
    required_key: Option<String>,
    contents: Vec<Content>,
    connections: Vec<RoomId>,
}

impl Room {
    /// Creates an empty, unlocked room.
    pub fn new(name: impl Into<String>, is_exit: bool) -> Self {
        Self {
            name: name.into(),
            is_exit,
            required_key: None,
            contents: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Builder form of [`Room::set_required_key`].
    pub fn locked_with(mut self, key: impl Into<String>) -> Self {
        self.set_required_key(key);
        self
    }

    /// Requires a KEY item with this name to enter.
    pub fn set_required_key(&mut self, key: impl Into<String>) {
        self.required_key = Some(key.into());
    }

    /// Name of the key that opens this room, if any.
    pub fn required_key(&self) -> Option<&str> {
        self.required_key.as_deref()
    }

    /// A room is locked exactly when it names a required key.
    pub fn is_locked(&self) -> bool {
        self.required_key.is_some()
    }

    /// Reaching this room wins the game.
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    /// Things in the room, in placement order.
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Outgoing edges, in connection order.
    pub fn connections(&self) -> &[RoomId] {
        &self.connections
    }

    /// Places an item or puzzle in the room.
    pub fn add_content(&mut self, content: impl Into<Content>) {
        self.contents.push(content.into());
    }

    /// Removes the first component with this name. Absent names are ignored.
    #[instrument(skip(self), fields(room = %self.name))]
    pub fn remove_content(&mut self, name: &str) -> Option<Content> {
        let index = self.contents.iter().position(|c| c.is_named(name))?;
        Some(self.contents.remove(index))
    }

    /// Removes and returns the item with this name. Puzzles are never taken.
    #[instrument(skip(self), fields(room = %self.name))]
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let index = self
            .contents
            .iter()
            .position(|c| c.as_item().is_some_and(|item| item.is_named(name)))?;
        match self.contents.remove(index) {
            Content::Item(item) => Some(item),
            Content::Puzzle(_) => None,
        }
    }

    /// Looks up any component by name.
    pub fn find(&self, name: &str) -> Option<&Content> {
        self.contents.iter().find(|c| c.is_named(name))
    }

    /// Looks up a puzzle by name.
    pub fn find_puzzle(&self, name: &str) -> Option<&Puzzle> {
        self.contents
            .iter()
            .filter_map(Content::as_puzzle)
            .find(|p| p.is_named(name))
    }

    /// Looks up a puzzle by name for solving.
    pub fn find_puzzle_mut(&mut self, name: &str) -> Option<&mut Puzzle> {
        self.contents
            .iter_mut()
            .filter_map(Content::as_puzzle_mut)
            .find(|p| p.is_named(name))
    }

    /// True if an item with this name lies in this room.
    pub fn holds_item(&self, name: &str) -> bool {
        self.contents
            .iter()
            .filter_map(Content::as_item)
            .any(|item| item.is_named(name))
    }

    /// Adds a directed edge to `other`. Repeated calls add nothing.
    pub fn connect(&mut self, other: RoomId) {
        if !self.connections.contains(&other) {
            debug!(room = %self.name, to = %other, "Connecting rooms");
            self.connections.push(other);
        }
    }
}

impl GameComponent for Room {
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect(&self, world: &World, out: &mut Transcript) {
        out.say(format!("Hi, {}", self.name));
        if self.is_exit {
            out.say("This is the EXIT!");
        }

        if self.contents.is_empty() && self.connections.is_empty() {
            out.say("The room is empty.");
            return;
        }

        if !self.contents.is_empty() {
            out.say("You see:");
            for content in &self.contents {
                out.say(format!("  - {}", content.name()));
            }
        }

        if !self.connections.is_empty() {
            out.say("Exits to:");
            for &id in &self.connections {
                let exit = world.room(id);
                let lock = if exit.is_locked() { " [LOCKED]" } else { "" };
                out.say(format!("  - {}{}", exit.name(), lock));
            }
        }
    }
}
