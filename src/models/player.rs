use crate::models::inventory::ItemContainer;
use crate::models::types::RoomId;

/// The user-controlled actor.
#[derive(Debug)]
pub struct Player {
    pub name: String,
    current_room: RoomId,
    previous_room: RoomId,
    pub inventory: ItemContainer,
}

impl Player {
    pub fn new(name: impl Into<String>, start_room: RoomId, inventory_capacity: Option<usize>) -> Self {
        Self {
            name: name.into(),
            current_room: start_room,
            previous_room: start_room,
            inventory: ItemContainer::with_capacity_limit(inventory_capacity),
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn previous_room(&self) -> RoomId {
        self.previous_room
    }

    /// Record a successful move; the old current room becomes the previous one.
    pub fn move_to(&mut self, room: RoomId) {
        self.previous_room = self.current_room;
        self.current_room = room;
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            name: self.name.clone(),
            current_room: self.current_room,
            previous_room: self.previous_room,
        }
    }
}

/// Read-only snapshot of the player handed to items and rooms during notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub name: String,
    pub current_room: RoomId,
    pub previous_room: RoomId,
}
