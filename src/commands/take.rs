use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::models::item::InteractionKind;
use crate::models::types::ItemId;
use crate::services::{ContainerRef, ItemService, PlayerService, RoomService};
use std::sync::Arc;

pub struct Take {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    item: Arc<ItemService>,
}

impl Take {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, item: Arc<ItemService>) -> Self {
        Self { player, room, item }
    }

    fn take_all(&self, cmd: &PlayerCommand, source: ContainerRef) -> CommandResult<String> {
        // iterate a snapshot; the live container shrinks as we go
        let ids = self.item.ids(source);
        if ids.is_empty() {
            return Ok("No items to take.".to_string());
        }

        let mut lines = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(line) = self.take_one(cmd, source, id)? {
                lines.push(line);
            }
        }
        Ok(lines.join("\n"))
    }

    fn take_one(&self, cmd: &PlayerCommand, source: ContainerRef, id: ItemId) -> CommandResult<Option<String>> {
        let Some(item) = self.item.summary(source, id) else {
            return Ok(None);
        };

        if item.anchored {
            tracing::warn!(item = %item.name, "attempt to take an anchored item");
            return Ok(Some(format!(
                "Despite your valiant attempts, the {} is unmovable.",
                item.name
            )));
        }

        let result = self.item.interact(source, id, InteractionKind::Get, cmd)?;
        if !result.success {
            return Ok(Some(if result.has_message() {
                result.message
            } else {
                format!("You can't take the {}.", item.name)
            }));
        }

        let line = match self.item.transfer(id, source, ContainerRef::Inventory) {
            Ok(()) if result.has_message() => result.message,
            Ok(()) => format!("You picked up the {}.", item.name),
            Err(e) => {
                tracing::warn!(item = %item.name, error = %e, "take: transfer failed");
                self.item.undo_get(source, id);
                "You can't take a non-transferable item!".to_string()
            }
        };
        Ok(Some(line))
    }
}

impl CommandHandler for Take {
    fn name(&self) -> &'static str {
        "take"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["GET", "TAKE"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let here = self.player.current_room();
        if !self.room.is_room_present(here) {
            tracing::warn!(room = %here, "player is not in a room, can't take items");
            return Ok(Some(
                "Taking nonexistent item from nonexistent location mysteriously fails!".to_string(),
            ));
        }
        if !cmd.has_noun() {
            return Ok(Some("What do you want to take?".to_string()));
        }

        let source = ContainerRef::Room(here);
        if cmd.noun.eq_ignore_ascii_case("ALL") {
            return self.take_all(cmd, source).map(Some);
        }

        let Some(id) = self.item.find(source, &cmd.noun) else {
            tracing::warn!(noun = %cmd.noun, room = %here, "take: no such item here");
            return Ok(Some(format!("I see no '{}' here!!!", cmd.noun)));
        };
        Ok(Some(self.take_one(cmd, source, id)?.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testkit::kit;
    use crate::models::item::{InteractionEvent, InteractionKind, InteractionResult, Item};
    use crate::models::types::RoomId;
    use crate::services::ContainerRef;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn take_moves_item_into_inventory() {
        let k = kit();
        assert_eq!(k.run("TAKE MUG").as_deref(), Some("You picked up the Mug"));
        assert!(k.item.find(ContainerRef::Inventory, "mug").is_some());
        assert!(k.item.find(ContainerRef::Room(RoomId(0)), "mug").is_none());
    }

    #[test]
    fn anchored_items_stay() {
        let k = kit();
        assert_eq!(
            k.run("get desk").as_deref(),
            Some("Despite your valiant attempts, the Desk is unmovable.")
        );
        assert!(k.item.find(ContainerRef::Room(RoomId(0)), "desk").is_some());
    }

    #[test]
    fn take_all_takes_what_it_can() {
        let k = kit();
        let out = k.run("take all").unwrap();
        assert_eq!(
            out,
            "You picked up the Mug\nDespite your valiant attempts, the Desk is unmovable."
        );
        assert_eq!(k.player.inventory_len(), 1);
        k.run("e");
        assert_eq!(k.run("take all").as_deref(), Some("No items to take."));
    }

    #[test]
    fn missing_noun_and_missing_item() {
        let k = kit();
        assert_eq!(k.run("take").as_deref(), Some("What do you want to take?"));
        assert_eq!(k.run("take spoon").as_deref(), Some("I see no 'SPOON' here!!!"));
    }

    #[test]
    fn unknown_room_cannot_be_taken_from() {
        let k = kit();
        k.world.write().player.move_to(RoomId(42));
        assert_eq!(
            k.run("take mug").as_deref(),
            Some("Taking nonexistent item from nonexistent location mysteriously fails!")
        );
    }

    struct Stubborn(Arc<AtomicUsize>);

    impl Item for Stubborn {
        fn display_name(&self) -> String {
            "Boulder".into()
        }
        fn full_description(&self) -> String {
            "Big.".into()
        }
        fn aliases(&self) -> Vec<String> {
            vec!["Boulder".into()]
        }
        fn is_anchored(&self) -> bool {
            true
        }
        fn interact(&mut self, _event: &InteractionEvent<'_>) -> InteractionResult {
            self.0.fetch_add(1, Ordering::SeqCst);
            InteractionResult::ok()
        }
    }

    #[test]
    fn anchored_take_never_raises_get() {
        let k = kit();
        let calls = Arc::new(AtomicUsize::new(0));
        k.world
            .write()
            .rooms
            .get_mut(RoomId(0))
            .unwrap()
            .items
            .add(Box::new(Stubborn(calls.clone())))
            .unwrap();

        k.run("take boulder");
        k.run("take all");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn refused_get_keeps_item_in_room() {
        struct Slippery;
        impl Item for Slippery {
            fn display_name(&self) -> String {
                "Eel".into()
            }
            fn full_description(&self) -> String {
                "Wriggles.".into()
            }
            fn aliases(&self) -> Vec<String> {
                vec!["Eel".into()]
            }
            fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
                match event.kind {
                    InteractionKind::Get => InteractionResult::refused(),
                    _ => InteractionResult::ok(),
                }
            }
        }

        let k = kit();
        k.world
            .write()
            .rooms
            .get_mut(RoomId(0))
            .unwrap()
            .items
            .add(Box::new(Slippery))
            .unwrap();

        assert_eq!(k.run("take eel").as_deref(), Some("You can't take the Eel."));
        assert!(k.item.find(ContainerRef::Room(RoomId(0)), "eel").is_some());
    }
}
