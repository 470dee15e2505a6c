use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::models::item::InteractionKind;
use crate::models::types::ItemId;
use crate::services::{ContainerRef, ItemService, PlayerService, RoomService};
use std::sync::Arc;

pub struct DropCmd {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    item: Arc<ItemService>,
}

impl DropCmd {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, item: Arc<ItemService>) -> Self {
        Self { player, room, item }
    }

    fn drop_one(&self, cmd: &PlayerCommand, dest: ContainerRef, id: ItemId) -> CommandResult<Option<String>> {
        let Some(item) = self.item.summary(ContainerRef::Inventory, id) else {
            return Ok(None);
        };

        let result = self.item.interact(ContainerRef::Inventory, id, InteractionKind::Drop, cmd)?;
        if !result.success {
            return Ok(Some(if result.has_message() {
                result.message
            } else {
                format!("You can't drop the {}.", item.name)
            }));
        }

        let line = match self.item.transfer(id, ContainerRef::Inventory, dest) {
            Ok(()) if result.has_message() => result.message,
            Ok(()) => format!("You dropped the {}.", item.name),
            Err(e) => {
                tracing::warn!(item = %item.name, error = %e, "drop: transfer failed");
                "You couldn't drop the item!".to_string()
            }
        };
        Ok(Some(line))
    }
}

impl CommandHandler for DropCmd {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["DROP"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let here = self.player.current_room();
        if !self.room.is_room_present(here) {
            tracing::warn!(room = %here, "player is not in a room, can't drop items");
            return Ok(Some("You can't drop items here!".to_string()));
        }
        if !cmd.has_noun() {
            return Ok(Some("What do you want to drop?".to_string()));
        }

        let dest = ContainerRef::Room(here);
        if cmd.noun.eq_ignore_ascii_case("ALL") {
            // snapshot first, then move item by item
            let ids = self.item.ids(ContainerRef::Inventory);
            if ids.is_empty() {
                return Ok(Some("You're not holding anything to drop.".to_string()));
            }
            let mut lines = Vec::with_capacity(ids.len());
            for id in ids {
                lines.extend(self.drop_one(cmd, dest, id)?);
            }
            return Ok(Some(lines.join("\n")));
        }

        match self.item.find(ContainerRef::Inventory, &cmd.noun) {
            Some(id) => Ok(Some(self.drop_one(cmd, dest, id)?.unwrap_or_default())),
            None => {
                tracing::warn!(noun = %cmd.noun, "drop: not carrying that");
                Ok(Some(format!("You don't have a '{}' to drop.", cmd.noun)))
            }
        }
    }
}
