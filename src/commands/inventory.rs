use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::services::PlayerService;
use std::sync::Arc;

pub struct Inventory {
    player: Arc<PlayerService>,
}

impl Inventory {
    pub fn new(player: Arc<PlayerService>) -> Self {
        Self { player }
    }
}

impl CommandHandler for Inventory {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["I", "INVENTORY"]
    }

    fn handle(&self, _cmd: &PlayerCommand) -> CommandResult {
        Ok(Some(format!("Inventory:\n{}", self.player.formatted_inventory())))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testkit::kit;

    #[test]
    fn lists_carried_items() {
        let k = kit();
        assert_eq!(k.run("i").as_deref(), Some("Inventory:\n  (nothing)"));

        k.run("take mug");
        assert_eq!(k.run("INVENTORY").as_deref(), Some("Inventory:\n  - Mug"));
    }
}
