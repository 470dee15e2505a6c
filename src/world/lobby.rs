use crate::models::item::SimpleItem;
use crate::models::room::{Room, RoomProvider};
use crate::models::types::RoomId;
use crate::world::room_header;

pub const LOBBY: RoomId = RoomId(0);

const DESCRIPTION: &str = "\
A quiet lobby with worn carpet and a reception desk nobody staffs anymore.
A door to the east glows faintly orange.";

pub struct LobbyProvider;

impl RoomProvider for LobbyProvider {
    fn create_room(&self) -> Room {
        let name = "The Lobby";
        let author = "Front Desk Staff";
        Room::new(LOBBY, name)
            .with_author(author)
            .with_description(format!("{}\n{DESCRIPTION}", room_header(name, author)))
            .with_item(SimpleItem::new(
                "Mug",
                "A chipped coffee mug. Someone left it half full.",
                &["Mug", "Cup"],
            ))
            .with_item(
                SimpleItem::new(
                    "Reception Desk",
                    "A massive oak desk, bolted to the floor.",
                    &["Desk", "Reception-Desk"],
                )
                .anchored(),
            )
            .with_character("Receptionist (asleep)")
    }
}
