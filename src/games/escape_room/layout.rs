//! The built-in escape room.

use super::item::{Item, ItemKind};
use super::puzzle::Puzzle;
use super::room::Room;
use super::world::World;
use std::collections::VecDeque;
use tracing::{info, instrument};

/// Hints surfaced by the engine, in order.
pub const HINTS: [&str; 5] = [
    "Try exploring all rooms first.",
    "Some puzzles give you keys as rewards.",
    "The Secret Corridor might lead somewhere important.",
    "Use 'back' to retrace your steps.",
    "Check your inventory with 'inventory' command.",
];

/// The hint queue for a fresh game.
pub fn default_hints() -> VecDeque<String> {
    HINTS.iter().map(|h| h.to_string()).collect()
}

/// Builds the standard six-room layout.
///
/// ```text
/// Entrance Hall -> Library -> Treasury (Gold Key)
///               -> Secret Corridor -> Dark Basement (Rusty Key) -> Exit Door
/// ```
#[instrument]
pub fn escape_room() -> World {
    let mut world = World::new();

    let entrance = world.add_room(Room::new("Entrance Hall", false));
    let library = world.add_room(Room::new("Library", false));
    let corridor = world.add_room(Room::new("Secret Corridor", false));
    let basement = world.add_room(Room::new("Dark Basement", false).locked_with("Rusty Key"));
    let treasury = world.add_room(Room::new("Treasury", false).locked_with("Gold Key"));
    let exit = world.add_room(Room::new("Exit Door", true));
    world.set_start(entrance);

    let hall = world.room_mut(entrance);
    hall.add_content(Item::new("Flashlight", 20, ItemKind::Tool));
    hall.add_content(Puzzle::riddle(
        "Ancient Riddle",
        3,
        "I speak without a mouth and hear without ears. I have no body, but I come alive with wind. What am I?",
        "echo",
        Some(Item::new("Rusty Key", 10, ItemKind::Key)),
    ));

    let shelves = world.room_mut(library);
    shelves.add_content(Item::new("Mysterious Note", 5, ItemKind::Clue));
    shelves.add_content(Puzzle::code(
        "Safe Lock",
        5,
        "1234",
        "The code is the first four counting numbers",
        Some(Item::new("Gold Key", 50, ItemKind::Key)),
    ));

    world.room_mut(corridor).add_content(Puzzle::riddle(
        "Guardian Riddle",
        4,
        "What has keys but no locks, space but no room, and you can enter but can't go inside?",
        "keyboard",
        Some(Item::new("Torch", 25, ItemKind::Tool)),
    ));

    world
        .room_mut(basement)
        .add_content(Item::new("Old Coin", 15, ItemKind::Tool));

    world.connect(entrance, library);
    world.connect(entrance, corridor);
    world.connect(library, treasury);
    // The basement is only reachable through the corridor.
    world.connect(corridor, basement);
    world.connect(basement, exit);

    info!(rooms = world.len(), "Escape room built");
    world
}
