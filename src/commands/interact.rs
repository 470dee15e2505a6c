use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::models::item::InteractionKind;
use crate::services::{ContainerRef, ItemService, PlayerService};
use std::sync::Arc;

/// Any verb from the interaction alias table, applied to a carried or nearby item.
pub struct Interact {
    player: Arc<PlayerService>,
    item: Arc<ItemService>,
}

impl Interact {
    pub fn new(player: Arc<PlayerService>, item: Arc<ItemService>) -> Self {
        Self { player, item }
    }
}

impl CommandHandler for Interact {
    fn name(&self) -> &'static str {
        "interact"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &[]
    }

    fn can_handle(&self, cmd: &PlayerCommand) -> bool {
        InteractionKind::resolve(&cmd.verb) != InteractionKind::Unknown
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let kind = InteractionKind::resolve(&cmd.verb);
        let verb = cmd.verb.to_ascii_lowercase();
        if !cmd.has_noun() {
            return Ok(Some(format!("What do you want to {verb}?")));
        }

        // carried items win over items lying around
        let here = ContainerRef::Room(self.player.current_room());
        let found = [ContainerRef::Inventory, here]
            .into_iter()
            .find_map(|loc| self.item.find(loc, &cmd.noun).map(|id| (loc, id)));
        let Some((loc, id)) = found else {
            tracing::warn!(noun = %cmd.noun, %kind, "interact: no such item");
            return Ok(Some(format!("You don't see a '{}' here.", cmd.noun)));
        };

        let name = self
            .item
            .summary(loc, id)
            .map(|s| s.name)
            .unwrap_or_else(|| cmd.noun.clone());
        let result = self.item.interact(loc, id, kind, cmd)?;

        let out = match (result.success, result.has_message()) {
            (_, true) => result.message,
            (true, false) => format!("You {verb} the {name}."),
            (false, false) => format!("You can't {verb} the {name}."),
        };
        Ok(Some(out))
    }
}
