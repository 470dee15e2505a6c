//! Authored world content.
//!
//! Rooms are discovered through [`RoomProvider`]s rather than hard-coded in the engine. The
//! diagnostic room is separate: it is always registered, under the id the configuration names.

pub mod blueprint;
mod fire_room;
mod lobby;
mod testing_room;

use crate::models::room::RoomProvider;
use crate::models::types::Direction;
use crate::services::MapService;
use crate::util::boxify_text;

pub use fire_room::{FIRE_ROOM, FireRoomProvider, FireSword};
pub use lobby::{LOBBY, LobbyProvider};
pub use testing_room::{TESTING_ROOM_NAME, TestingMap, testing_room};

/// The rooms that ship with the engine, in registration order.
pub fn providers() -> Vec<Box<dyn RoomProvider>> {
    vec![Box::new(LobbyProvider), Box::new(FireRoomProvider)]
}

/// Connect the built-in rooms to each other. Exits out of rooms that were not registered are skipped.
pub fn wire_map(map: &MapService) {
    for (from, dir, to) in [(LOBBY, Direction::East, FIRE_ROOM), (FIRE_ROOM, Direction::West, LOBBY)] {
        if let Err(e) = map.connect(from, dir, to) {
            tracing::warn!(%from, %dir, error = %e, "built-in exit skipped");
        }
    }
}

/// Boxed name/author banner placed on top of an authored room's description.
pub fn room_header(name: &str, author: &str) -> String {
    boxify_text(&format!("{name}\n{author}"))
}
