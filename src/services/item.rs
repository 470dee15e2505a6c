use crate::input::parser::PlayerCommand;
use crate::models::inventory::ItemContainer;
use crate::models::item::{InteractionEvent, InteractionKind, InteractionResult};
use crate::models::types::{ItemId, RoomId};
use crate::services::ServiceError;
use crate::state::world::{SharedWorld, World};

/// Names one of the containers an item can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerRef {
    Room(RoomId),
    Inventory,
}

impl core::fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerRef::Room(id) => write!(f, "room {id}"),
            ContainerRef::Inventory => f.write_str("inventory"),
        }
    }
}

/// Read-only facts about one item, taken in a single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub anchored: bool,
}

fn container(world: &World, loc: ContainerRef) -> Result<&ItemContainer, ServiceError> {
    match loc {
        ContainerRef::Room(id) => world
            .rooms
            .get(id)
            .map(|r| &r.items)
            .ok_or(ServiceError::RoomNotFound(id)),
        ContainerRef::Inventory => Ok(&world.player.inventory),
    }
}

fn container_mut(world: &mut World, loc: ContainerRef) -> Result<&mut ItemContainer, ServiceError> {
    match loc {
        ContainerRef::Room(id) => world
            .rooms
            .get_mut(id)
            .map(|r| &mut r.items)
            .ok_or(ServiceError::RoomNotFound(id)),
        ContainerRef::Inventory => Ok(&mut world.player.inventory),
    }
}

pub struct ItemService {
    world: SharedWorld,
}

impl ItemService {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn find(&self, loc: ContainerRef, noun: &str) -> Option<ItemId> {
        let world = self.world.read();
        container(&world, loc).ok()?.find_by_alias(noun)
    }

    pub fn find_all(&self, loc: ContainerRef, noun: &str) -> Vec<ItemId> {
        let world = self.world.read();
        container(&world, loc)
            .map(|c| c.find_all_by_alias(noun))
            .unwrap_or_default()
    }

    /// Snapshot of the ids in a container. Safe to iterate while items move.
    pub fn ids(&self, loc: ContainerRef) -> Vec<ItemId> {
        let world = self.world.read();
        container(&world, loc).map(|c| c.ids()).unwrap_or_default()
    }

    pub fn contains(&self, loc: ContainerRef, id: ItemId) -> bool {
        let world = self.world.read();
        container(&world, loc).is_ok_and(|c| c.contains(id))
    }

    pub fn summary(&self, loc: ContainerRef, id: ItemId) -> Option<ItemSummary> {
        let world = self.world.read();
        let item = container(&world, loc).ok()?.get(id)?;
        Some(ItemSummary {
            id,
            name: item.display_name(),
            description: item.full_description(),
            anchored: item.is_anchored(),
        })
    }

    // ========================================================================
    // INTERACTION & TRANSFER
    // ========================================================================

    /// Raise an interaction event on the item. The acting player is the session's player.
    pub fn interact(
        &self,
        loc: ContainerRef,
        id: ItemId,
        kind: InteractionKind,
        command: &PlayerCommand,
    ) -> Result<InteractionResult, ServiceError> {
        let mut world = self.world.write();
        let player = world.player.view();
        let item = container_mut(&mut world, loc)?
            .get_mut(id)
            .ok_or_else(|| ServiceError::NotInSource {
                item: id,
                location: loc.to_string(),
            })?;

        let event = InteractionEvent::new(kind, command, &player);
        let result = item.interact(&event);
        tracing::debug!(%kind, %loc, item = %id, success = result.success, "item interaction");
        Ok(result)
    }

    /// Let the item roll back a GET that succeeded but whose transfer was refused.
    pub fn undo_get(&self, loc: ContainerRef, id: ItemId) {
        let mut world = self.world.write();
        match container_mut(&mut world, loc).ok().and_then(|c| c.get_mut(id)) {
            Some(item) => item.get_undone(),
            None => tracing::warn!(%loc, item = %id, "undo get: item not found"),
        }
    }

    /// Move an item from `from` to `to`, all or nothing.
    ///
    /// The item must currently be in `from` and `to` must accept it; otherwise nothing moves.
    pub fn transfer(&self, id: ItemId, from: ContainerRef, to: ContainerRef) -> Result<(), ServiceError> {
        let mut world = self.world.write();

        if !container(&world, from)?.contains(id) {
            tracing::warn!(item = %id, %from, "transfer refused: item not in source");
            return Err(ServiceError::NotInSource {
                item: id,
                location: from.to_string(),
            });
        }
        if let Err(e) = container(&world, to)?.check_accept(id) {
            tracing::warn!(item = %id, %to, error = %e, "transfer refused by destination");
            return Err(e.into());
        }

        let entry = container_mut(&mut world, from)?
            .take(id)
            .ok_or_else(|| ServiceError::NotInSource {
                item: id,
                location: from.to_string(),
            })?;

        // Both containers were validated under this lock; restore the entry if that ever changes.
        let dest = container_mut(&mut world, to)?;
        let Err(e) = dest.insert(entry) else {
            return Ok(());
        };
        tracing::error!(item = %id, %from, %to, error = %e, "insert failed after validation");
        Err(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{Item, SimpleItem};
    use crate::models::player::Player;
    use crate::models::room::Room;
    use crate::state::world::shared;

    fn setup(capacity: Option<usize>) -> (ItemService, ItemId) {
        let mut w = World::new(Player::new("Ada", RoomId(0), capacity));
        let mut room = Room::new(RoomId(0), "Hall");
        let mug = room.items.add(Box::new(SimpleItem::new("Mug", "A mug.", &["Mug"]))).unwrap();
        w.rooms.add_room(room).unwrap();
        w.map.add_room(RoomId(0));
        (ItemService::new(shared(w)), mug)
    }

    #[test]
    fn transfer_moves_exactly_once() {
        let (svc, mug) = setup(None);
        svc.transfer(mug, ContainerRef::Room(RoomId(0)), ContainerRef::Inventory).unwrap();

        assert!(svc.contains(ContainerRef::Inventory, mug));
        assert!(!svc.contains(ContainerRef::Room(RoomId(0)), mug));

        // second attempt: no longer in the source
        let err = svc
            .transfer(mug, ContainerRef::Room(RoomId(0)), ContainerRef::Inventory)
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotInSource { .. }));
        assert!(svc.contains(ContainerRef::Inventory, mug));
    }

    #[test]
    fn refused_transfer_leaves_item_in_source() {
        let (svc, mug) = setup(Some(0));
        let err = svc
            .transfer(mug, ContainerRef::Room(RoomId(0)), ContainerRef::Inventory)
            .unwrap_err();

        assert!(matches!(err, ServiceError::Destination(_)));
        assert!(svc.contains(ContainerRef::Room(RoomId(0)), mug));
        assert!(!svc.contains(ContainerRef::Inventory, mug));
    }

    #[test]
    fn transfer_to_unknown_room_fails_cleanly() {
        let (svc, mug) = setup(None);
        let err = svc
            .transfer(mug, ContainerRef::Room(RoomId(0)), ContainerRef::Room(RoomId(9)))
            .unwrap_err();

        assert!(matches!(err, ServiceError::RoomNotFound(RoomId(9))));
        assert!(svc.contains(ContainerRef::Room(RoomId(0)), mug));
    }

    #[test]
    fn interact_reaches_the_item() {
        struct Counter(u32);
        impl Item for Counter {
            fn display_name(&self) -> String {
                format!("Counter {}", self.0)
            }
            fn full_description(&self) -> String {
                "Counts.".into()
            }
            fn aliases(&self) -> Vec<String> {
                vec!["Counter".into()]
            }
            fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
                self.0 += 1;
                InteractionResult::success(format!("{} by {}", event.kind, event.player.name))
            }
        }

        let (svc, _) = setup(None);
        let id = {
            let mut w = svc.world.write();
            w.player.inventory.add(Box::new(Counter(0))).unwrap()
        };
        let cmd = PlayerCommand::parse("PUSH COUNTER").unwrap();

        let r = svc.interact(ContainerRef::Inventory, id, InteractionKind::Push, &cmd).unwrap();
        assert_eq!(r.message, "PUSH by Ada");
        assert_eq!(svc.summary(ContainerRef::Inventory, id).unwrap().name, "Counter 1");
        assert_eq!(svc.find(ContainerRef::Inventory, "counter"), Some(id));
    }
}
