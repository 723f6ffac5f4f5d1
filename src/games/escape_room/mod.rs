//! Escape room: rooms, items, puzzles and the command loop that ties them together.

mod command;
mod component;
mod engine;
mod error;
mod item;
mod layout;
mod player;
mod puzzle;
mod room;
mod transcript;
mod world;

pub use command::{Command, Verb};
pub use component::{Content, GameComponent};
pub use engine::{GameEngine, GameOutcome};
pub use error::{EngineError, GameError};
pub use item::{Item, ItemKind};
pub use layout::{HINTS, default_hints, escape_room};
pub use player::Player;
pub use puzzle::{Puzzle, PuzzleKind};
pub use room::{Room, RoomId};
pub use transcript::Transcript;
pub use world::World;
