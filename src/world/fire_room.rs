use crate::models::item::{InteractionEvent, InteractionKind, InteractionResult, Item, default_interaction};
use crate::models::room::{Room, RoomProvider};
use crate::models::types::RoomId;
use crate::world::room_header;

pub const FIRE_ROOM: RoomId = RoomId(3);

const DESCRIPTION: &str = "\
The room is large and sweltering. There is a soot filled fireplace
located at the south wall. A flame burns white and hot while the air
grows evermore intense.";

pub struct FireRoomProvider;

impl RoomProvider for FireRoomProvider {
    fn create_room(&self) -> Room {
        let name = "Fire Room";
        let author = "Ember Works";
        Room::new(FIRE_ROOM, name)
            .with_author(author)
            .with_description(format!("{}\n{DESCRIPTION}", room_header(name, author)))
            .with_item(FireSword)
    }
}

pub struct FireSword;

impl Item for FireSword {
    fn display_name(&self) -> String {
        "Eternal Fire Sword".to_string()
    }

    fn full_description(&self) -> String {
        "A long, sharp blade radiating with unnatural and unwavering heat.\n\
         The edge glows a dim-ember light, and the hilt is wrapped with scorched,\n\
         fireproof leather."
            .to_string()
    }

    fn aliases(&self) -> Vec<String> {
        ["Sword", "FireSword", "Fire-Sword", "Hot-Sword"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
        match event.kind {
            InteractionKind::Use => InteractionResult::success(format!("You use the {} successfully!", self.display_name())),
            InteractionKind::Inspect => InteractionResult::success("The blade glows a dim yellow-red."),
            InteractionKind::Consume => InteractionResult::failure("Your tongue is burned and cut slightly."),
            InteractionKind::Taunt => InteractionResult::success("Your sword strikes fear in your enemies."),
            InteractionKind::Get | InteractionKind::Drop | InteractionKind::Look => {
                default_interaction(&self.display_name(), event.kind)
            }
            _ => InteractionResult::failure(format!("You can't do that with the {}", self.display_name())),
        }
    }
}
