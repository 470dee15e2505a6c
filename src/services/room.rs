use crate::error::AppResult;
use crate::models::player::PlayerView;
use crate::models::room::{InputIntercept, Room};
use crate::models::types::RoomId;
use crate::services::ServiceError;
use crate::state::world::SharedWorld;

pub struct RoomService {
    world: SharedWorld,
}

impl RoomService {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    /// Register a room and give it a node in the map.
    pub fn add_room(&self, room: Room) -> AppResult<RoomId> {
        let id = room.id();
        let mut world = self.world.write();
        world.rooms.add_room(room)?;
        world.map.add_room(id);
        tracing::debug!(room = %id, "room registered");
        Ok(id)
    }

    pub fn is_room_present(&self, id: RoomId) -> bool {
        self.world.read().rooms.contains(id)
    }

    pub fn room_ids(&self) -> Vec<RoomId> {
        self.world.read().rooms.ids()
    }

    pub fn room_name(&self, id: RoomId) -> Option<String> {
        self.world.read().rooms.get(id).map(|r| r.info.name.clone())
    }

    pub fn description(&self, id: RoomId) -> Option<String> {
        self.world.read().rooms.get(id).map(|r| r.info.description.clone())
    }

    pub fn image_path(&self, id: RoomId) -> Option<String> {
        self.world.read().rooms.get(id).and_then(|r| r.info.image.clone())
    }

    pub fn item_names(&self, id: RoomId) -> Vec<String> {
        self.world
            .read()
            .rooms
            .get(id)
            .map(|r| r.items.display_names())
            .unwrap_or_default()
    }

    /// Short-form listing of the room's items, one per line.
    pub fn formatted_item_names(&self, id: RoomId) -> String {
        let names = self.item_names(id);
        if names.is_empty() {
            return "  Nothing of interest.".to_string();
        }
        names.iter().map(|n| format!("  {n}")).collect::<Vec<_>>().join("\n")
    }

    /// Tell the room it is being observed. Returns whatever the room says back.
    pub fn notify_looking(&self, id: RoomId, player: &PlayerView) -> Result<Option<String>, ServiceError> {
        let mut world = self.world.write();
        let room = world.rooms.get_mut(id).ok_or(ServiceError::RoomNotFound(id))?;
        Ok(room.notify_looking(player))
    }

    /// Let the room rewrite or swallow a raw input line. Unknown rooms pass it through.
    pub fn intercept_input(&self, id: RoomId, line: &str) -> InputIntercept {
        let mut world = self.world.write();
        match world.rooms.get_mut(id) {
            Some(room) => room.intercept_input(line),
            None => InputIntercept::Continue(line.to_string()),
        }
    }

    /// Dump of one room for `DEBUG ROOM`.
    pub fn debug_room_info(&self, id: RoomId, inventory: &str) -> String {
        let world = self.world.read();
        let Some(room) = world.rooms.get(id) else {
            return format!("Room {id} is not registered.");
        };

        let characters = if room.characters.is_empty() {
            "(none)".to_string()
        } else {
            room.characters.join(", ")
        };
        let items = room.items.display_names().join(", ");

        format!(
            "Room ID:     {id}\nName:        {}\nAuthor:      {}\nImage:       {}\nItems:       {}\nCharacters:  {}\nEvents:      {}\nInventory:\n{inventory}",
            room.info.name,
            room.info.author,
            room.info.image.as_deref().unwrap_or("(none)"),
            if items.is_empty() { "(none)" } else { items.as_str() },
            characters,
            if room.has_events() { "yes" } else { "no" },
        )
    }
}
