//! The player: where they are, where they have been, what they carry.

use super::component::GameComponent;
use super::error::GameError;
use super::item::Item;
use super::room::RoomId;
use super::transcript::Transcript;
use super::world::World;
use tracing::{debug, info, instrument, warn};

/// Player state. The current room is always a valid id in the player's world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    current_room: RoomId,
    history: Vec<RoomId>,
    inventory: Vec<Item>,
}

impl Player {
    /// Creates a player standing in `start` with empty pockets.
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            history: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// The room the player is in.
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Rooms left behind, most recent last.
    pub fn history(&self) -> &[RoomId] {
        &self.history
    }

    /// Carried items in their current order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Puts an item into the inventory.
    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// True if the player carries a KEY item with this name.
    pub fn has_key(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.opens(name))
    }

    /// Moves into `target`, unlocking it first if needed.
    ///
    /// Keys are not used up; the same key opens its room again later.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LockedRoom`] if `target` needs a key the player
    /// does not carry. The player does not move.
    #[instrument(skip(self, world, out), fields(from = %self.current_room))]
    pub fn move_to(
        &mut self,
        world: &World,
        target: RoomId,
        out: &mut Transcript,
    ) -> Result<(), GameError> {
        let room = world.room(target);

        if let Some(key) = room.required_key() {
            if !self.has_key(key) {
                warn!(room = room.name(), key, "Room is locked");
                return Err(GameError::LockedRoom {
                    room: room.name().to_string(),
                    key: key.to_string(),
                });
            }
            out.say(format!("You used {} to unlock the room.", key));
        }

        self.history.push(self.current_room);
        self.current_room = target;
        info!(room = room.name(), "Player moved");
        out.say(format!("You moved to: {}", room.name()));
        Ok(())
    }

    /// Steps back to the previous room. Returns false if there is none.
    #[instrument(skip(self, world, out))]
    pub fn go_back(&mut self, world: &World, out: &mut Transcript) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current_room = previous;
                out.say(format!("You went back to: {}", world.room(previous).name()));
                true
            }
            None => {
                out.say("You can't go back any further!");
                false
            }
        }
    }

    /// Picks up an item from the current room by case-insensitive name.
    ///
    /// A missing item is reported to the player, not raised as an error.
    #[instrument(skip(self, world, out))]
    pub fn pickup_item(&mut self, world: &mut World, name: &str, out: &mut Transcript) -> bool {
        match world.room_mut(self.current_room).take_item(name) {
            Some(item) => {
                item.collect(self, out);
                true
            }
            None => {
                debug!("No such item here");
                out.say(format!("Item not found: {}", name));
                false
            }
        }
    }

    /// Sorts the inventory by value, lowest first. Equal values keep their order.
    #[instrument(skip(self, out), fields(items = self.inventory.len()))]
    pub fn sort_inventory_by_value(&mut self, out: &mut Transcript) {
        // Vec::sort_by is stable.
        self.inventory.sort_by(Item::cmp_by_value);
        out.say("Inventory sorted by value.");
    }

    /// Lists the inventory.
    pub fn show_inventory(&self, out: &mut Transcript) {
        if self.inventory.is_empty() {
            out.say("Your inventory is empty.");
            return;
        }
        out.say("=== Inventory ===");
        for item in &self.inventory {
            out.say(format!("  - {} ({})", item.name(), item.kind()));
        }
    }
}
