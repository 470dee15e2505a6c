use crate::models::player::PlayerView;
use crate::models::types::RoomId;
use crate::services::ServiceError;
use crate::state::world::SharedWorld;

/// Text produced by the two rooms involved in a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub from: RoomId,
    pub to: RoomId,
    pub leaving: Option<String>,
    pub entering: Option<String>,
}

impl Relocation {
    /// Leaving text first, then entering text.
    pub fn notifications(&self) -> Vec<String> {
        self.leaving.iter().chain(self.entering.iter()).cloned().collect()
    }
}

pub struct PlayerService {
    world: SharedWorld,
}

impl PlayerService {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    pub fn name(&self) -> String {
        self.world.read().player.name.clone()
    }

    pub fn current_room(&self) -> RoomId {
        self.world.read().player.current_room()
    }

    pub fn previous_room(&self) -> RoomId {
        self.world.read().player.previous_room()
    }

    pub fn view(&self) -> PlayerView {
        self.world.read().player.view()
    }

    pub fn inventory_names(&self) -> Vec<String> {
        self.world.read().player.inventory.display_names()
    }

    pub fn inventory_len(&self) -> usize {
        self.world.read().player.inventory.len()
    }

    /// One line per carried item, or a note that nothing is carried.
    pub fn formatted_inventory(&self) -> String {
        let names = self.inventory_names();
        if names.is_empty() {
            return "  (nothing)".to_string();
        }
        names.iter().map(|n| format!("  - {n}")).collect::<Vec<_>>().join("\n")
    }

    /// Move the player to `dest` and notify both rooms.
    ///
    /// The destination is checked, the player updated and the rooms told (old room first) under
    /// a single write lock. An unknown destination changes nothing.
    pub fn move_to(&self, dest: RoomId) -> Result<Relocation, ServiceError> {
        let mut world = self.world.write();

        if !world.room_exists(dest) {
            tracing::warn!(room = %dest, "The target room does not exist");
            return Err(ServiceError::RoomNotFound(dest));
        }

        let from = world.player.current_room();
        world.player.move_to(dest);
        let view = world.player.view();

        let leaving = world.rooms.get_mut(from).and_then(|room| room.notify_leaving(&view));
        let entering = world.rooms.get_mut(dest).and_then(|room| room.notify_entering(&view));

        tracing::debug!(%from, to = %dest, "player moved");
        Ok(Relocation {
            from,
            to: dest,
            leaving,
            entering,
        })
    }
}
