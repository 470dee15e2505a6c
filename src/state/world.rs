use crate::models::map::GameMap;
use crate::models::player::Player;
use crate::models::room::RoomList;
use crate::models::types::RoomId;
use parking_lot::RwLock;
use std::sync::Arc;

/// Everything a game session mutates: the player, the registered rooms and the exit graph.
#[derive(Debug)]
pub struct World {
    pub player: Player,
    pub rooms: RoomList,
    pub map: GameMap,
}

impl World {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rooms: RoomList::new(),
            map: GameMap::new(),
        }
    }

    /// A room exists once it is registered: listed in `rooms` and a node of `map`.
    pub fn room_exists(&self, id: RoomId) -> bool {
        self.rooms.contains(id) && self.map.contains(id)
    }
}

/// The single lock guarding a session's world. Services take it once per operation.
pub type SharedWorld = Arc<RwLock<World>>;

pub fn shared(world: World) -> SharedWorld {
    Arc::new(RwLock::new(world))
}
