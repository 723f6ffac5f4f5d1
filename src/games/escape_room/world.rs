//! The room arena and the recursive queries over it.
//!
//! Rooms refer to each other by [`RoomId`]. Every traversal tracks where it
//! has been, so a cyclic layout terminates instead of recursing forever.

use super::component::{Content, GameComponent};
use super::room::{Room, RoomId};
use super::transcript::Transcript;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// All rooms of one game plus the room the player starts in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    rooms: Vec<Room>,
    start: RoomId,
}

impl World {
    /// Creates a world with no rooms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its id. The first room added is the start.
    #[instrument(skip(self, room), fields(room = %room.name()))]
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(room);
        debug!(%id, "Room added");
        id
    }

    /// Chooses the starting room.
    pub fn set_start(&mut self, id: RoomId) {
        self.start = id;
    }

    /// The starting room.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Returns the room with this id.
    ///
    /// Ids are only minted by [`World::add_room`], so a lookup can only miss
    /// with an id taken from a different world, which panics.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Returns the room with this id mutably.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// All rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True if no room has been added.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Finds a room anywhere in the world by case-insensitive name.
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms().find(|(_, r)| r.is_named(name)).map(|(id, _)| id)
    }

    /// Adds a directed edge `from -> to`.
    pub fn connect(&mut self, from: RoomId, to: RoomId) {
        self.room_mut(from).connect(to);
    }

    /// Counts `(solved, total)` puzzles across every room.
    pub fn puzzle_progress(&self) -> (usize, usize) {
        self.rooms
            .iter()
            .flat_map(|r| r.contents().iter().filter_map(Content::as_puzzle))
            .fold((0, 0), |(solved, total), p| {
                (solved + usize::from(*p.solved()), total + 1)
            })
    }

    /// Prints the graph below `from` as an indented depth-first outline.
    ///
    /// An edge leading back into the current path is printed with a
    /// `[LOOP]` marker and not followed.
    #[instrument(skip(self, out))]
    pub fn explore(&self, from: RoomId, depth: usize, out: &mut Transcript) {
        let mut path = Vec::new();
        self.explore_path(from, depth, &mut path, out);
    }

    fn explore_path(&self, id: RoomId, depth: usize, path: &mut Vec<RoomId>, out: &mut Transcript) {
        let room = self.room(id);
        let indent = "  ".repeat(depth);

        if path.contains(&id) {
            out.say(format!("{}- {} [LOOP]", indent, room.name()));
            return;
        }

        let exit = if room.is_exit() { " [EXIT]" } else { "" };
        out.say(format!("{}- {}{}", indent, room.name(), exit));

        path.push(id);
        for &next in room.connections() {
            self.explore_path(next, depth + 1, path, out);
        }
        path.pop();
    }

    /// True if an item with this name lies in `from` or any room reachable from it.
    #[instrument(skip(self))]
    pub fn contains_item(&self, from: RoomId, item: &str) -> bool {
        let mut visited = HashSet::new();
        self.contains_item_visit(from, item, &mut visited)
    }

    fn contains_item_visit(&self, id: RoomId, item: &str, visited: &mut HashSet<RoomId>) -> bool {
        if !visited.insert(id) {
            return false;
        }
        let room = self.room(id);
        room.holds_item(item)
            || room
                .connections()
                .iter()
                .any(|&next| self.contains_item_visit(next, item, visited))
    }

    /// Length of the longest edge path leaving `from`.
    ///
    /// A room without exits has depth 0. An edge back into the current path
    /// counts as one step and ends there.
    #[instrument(skip(self))]
    pub fn max_depth(&self, from: RoomId) -> usize {
        let mut path = Vec::new();
        self.max_depth_path(from, &mut path)
    }

    fn max_depth_path(&self, id: RoomId, path: &mut Vec<RoomId>) -> usize {
        path.push(id);
        let depth = self
            .room(id)
            .connections()
            .iter()
            .map(|&next| {
                if path.contains(&next) {
                    1
                } else {
                    1 + self.max_depth_path(next, path)
                }
            })
            .max()
            .unwrap_or(0);
        path.pop();
        depth
    }
}
