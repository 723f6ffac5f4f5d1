//! Collectible items.

use super::component::{GameComponent, same_name};
use super::player::Player;
use super::transcript::Transcript;
use super::world::World;
use derive_getters::Getters;
use derive_new::new;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// What an item is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ItemKind {
    /// Opens a locked room whose required key has the same name.
    Key,
    /// A usable object with no game-rule effect.
    Tool,
    /// A note or hint.
    Clue,
}

/// An item lying in a room, held by the player, or waiting as a puzzle reward.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Item {
    #[new(into)]
    name: String,
    value: i32,
    kind: ItemKind,
}

impl Item {
    /// True if this item can open a lock named `key_name`.
    pub fn opens(&self, key_name: &str) -> bool {
        self.kind == ItemKind::Key && same_name(&self.name, key_name)
    }

    /// Orders items by value, lowest first.
    pub fn cmp_by_value(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Moves this item into the player's inventory.
    #[instrument(skip(self, player, out), fields(item = %self.name))]
    pub fn collect(self, player: &mut Player, out: &mut Transcript) {
        debug!("Item collected");
        out.say(format!("Picked up: {}", self.name));
        player.add_to_inventory(self);
    }
}

impl GameComponent for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect(&self, _world: &World, out: &mut Transcript) {
        out.say(format!(
            "[Item] {} (Type: {}, Value: {})",
            self.name, self.kind, self.value
        ));
    }
}
