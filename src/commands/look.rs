use crate::commands::{CommandHandler, CommandResult, join_lines};
use crate::input::parser::PlayerCommand;
use crate::models::item::InteractionKind;
use crate::models::types::RoomId;
use crate::services::{ContainerRef, ItemService, PlayerService, RoomService};
use std::sync::Arc;

/// Room description followed by the short item listing.
pub fn describe_room(rooms: &RoomService, id: RoomId) -> String {
    format!(
        "{}\n\nYou See:\n{}",
        rooms.description(id).unwrap_or_default(),
        rooms.formatted_item_names(id)
    )
}

pub struct Look {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    item: Arc<ItemService>,
}

impl Look {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, item: Arc<ItemService>) -> Self {
        Self { player, room, item }
    }

    fn look_at_room(&self, here: RoomId) -> CommandResult<String> {
        let said = self.room.notify_looking(here, &self.player.view())?;
        Ok(join_lines([said.unwrap_or_default(), describe_room(&self.room, here)]))
    }

    fn look_at_items(&self, cmd: &PlayerCommand, here: RoomId) -> CommandResult<String> {
        let mut descriptions = Vec::new();
        for loc in [ContainerRef::Inventory, ContainerRef::Room(here)] {
            for id in self.item.find_all(loc, &cmd.noun) {
                // looking may change what the item says about itself
                self.item.interact(loc, id, InteractionKind::Look, cmd)?;
                if let Some(summary) = self.item.summary(loc, id) {
                    descriptions.push(summary.description);
                }
            }
        }

        let joined = descriptions.join("\n");
        if joined.trim().is_empty() {
            return Ok(format!("You don't see {} here.", cmd.noun));
        }
        Ok(joined)
    }
}

impl CommandHandler for Look {
    fn name(&self) -> &'static str {
        "look"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["L", "LOOK"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let here = self.player.current_room();
        if !self.room.is_room_present(here) {
            tracing::warn!(room = %here, "look: current room is not registered");
            return Ok(Some(
                "You peer deeply into nothingness!\n(The room you are in does not exist!)".to_string(),
            ));
        }

        let text = if !cmd.has_noun() || cmd.noun.eq_ignore_ascii_case("ROOM") {
            self.look_at_room(here)?
        } else {
            self.look_at_items(cmd, here)?
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testkit::kit;
    use crate::models::item::{InteractionEvent, InteractionKind, InteractionResult, Item, SimpleItem};
    use crate::models::player::PlayerView;
    use crate::models::room::{RoomEvents, RoomInfo};
    use crate::models::types::RoomId;

    #[test]
    fn look_describes_room_and_items() {
        let k = kit();
        assert_eq!(
            k.run("look").as_deref(),
            Some("A drafty hall.\n\nYou See:\n  Mug\n  Desk")
        );
        assert_eq!(k.run("L ROOM"), k.run("look"));
    }

    #[test]
    fn look_at_items_in_both_places() {
        let k = kit();
        k.run("take mug");
        k.world
            .write()
            .rooms
            .get_mut(RoomId(0))
            .unwrap()
            .items
            .add(Box::new(SimpleItem::new("Mug", "Another mug.", &["Mug"])))
            .unwrap();

        assert_eq!(k.run("look mug").as_deref(), Some("A chipped mug.\nAnother mug."));
        assert_eq!(k.run("look spoon").as_deref(), Some("You don't see SPOON here."));
    }

    #[test]
    fn look_without_a_room() {
        let k = kit();
        k.world.write().player.move_to(RoomId(9));
        assert_eq!(
            k.run("l").as_deref(),
            Some("You peer deeply into nothingness!\n(The room you are in does not exist!)")
        );
    }

    #[test]
    fn looking_can_change_an_item() {
        struct Note {
            read: bool,
        }
        impl Item for Note {
            fn display_name(&self) -> String {
                "Note".into()
            }
            fn full_description(&self) -> String {
                if self.read { "It says: hi.".into() } else { "A folded note.".into() }
            }
            fn aliases(&self) -> Vec<String> {
                vec!["Note".into()]
            }
            fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
                if event.kind == InteractionKind::Look {
                    self.read = true;
                }
                InteractionResult::ok()
            }
        }

        let k = kit();
        k.world
            .write()
            .rooms
            .get_mut(RoomId(0))
            .unwrap()
            .items
            .add(Box::new(Note { read: false }))
            .unwrap();
        assert_eq!(k.run("look note").as_deref(), Some("It says: hi."));
    }

    #[test]
    fn observed_room_is_told() {
        struct Shy;
        impl RoomEvents for Shy {
            fn player_looking(&mut self, info: &mut RoomInfo, p: &PlayerView) -> Option<String> {
                info.description = "Nothing here now.".into();
                Some(format!("The room blushes at {}.", p.name))
            }
        }

        let k = kit();
        let room = crate::models::room::Room::new(RoomId(5), "Shy room").with_events(Shy);
        k.room.add_room(room).unwrap();
        k.world.write().player.move_to(RoomId(5));

        assert_eq!(
            k.run("look").as_deref(),
            Some("The room blushes at Ada.\nNothing here now.\n\nYou See:\n  Nothing of interest.")
        );
    }
}
