use crate::error::AppResult;
use crate::models::types::{Direction, RoomId};
use crate::state::world::SharedWorld;

pub struct MapService {
    world: SharedWorld,
}

impl MapService {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    /// Is `id` a registered room? A miss is logged; callers turn it into player-facing text.
    pub fn does_room_exist(&self, id: RoomId) -> bool {
        if !self.world.read().room_exists(id) {
            tracing::warn!(room = %id, "The target room does not exist");
            return false;
        }
        true
    }

    pub fn exit(&self, from: RoomId, dir: Direction) -> Option<RoomId> {
        self.world.read().map.exit(from, dir)
    }

    /// Add an exit out of a registered room. The destination may be unregistered.
    pub fn connect(&self, from: RoomId, dir: Direction, to: RoomId) -> AppResult<()> {
        if let Some(old) = self.world.write().map.connect(from, dir, to)? {
            tracing::warn!(%from, %dir, %old, new = %to, "exit replaced");
        }
        Ok(())
    }

    /// Dump of the whole graph for `DEBUG MAP`.
    pub fn formatted_map(&self) -> String {
        let world = self.world.read();
        let mut out = Vec::new();
        for id in world.map.room_ids() {
            let name = world.rooms.get(id).map(|r| r.info.name.as_str()).unwrap_or("?");
            out.push(format!("[{id}] {name}"));

            let exits = world.map.exits(id);
            if exits.is_empty() {
                out.push("    (no exits)".to_string());
            }
            for (dir, to) in exits {
                let marker = if world.room_exists(to) { "" } else { " (missing)" };
                out.push(format!("    {dir:<5} -> {to}{marker}"));
            }
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Player;
    use crate::models::room::Room;
    use crate::state::world::{World, shared};

    fn svc() -> MapService {
        let mut w = World::new(Player::new("Ada", RoomId(0), None));
        for (id, name) in [(0, "Hall"), (3, "Cellar")] {
            w.rooms.add_room(Room::new(RoomId(id), name)).unwrap();
            w.map.add_room(RoomId(id));
        }
        MapService::new(shared(w))
    }

    #[test]
    fn existence_needs_registration() {
        let svc = svc();
        assert!(svc.does_room_exist(RoomId(3)));
        assert!(!svc.does_room_exist(RoomId(500)));
    }

    #[test]
    fn exits_from_unregistered_rooms_are_refused() {
        let svc = svc();
        assert!(svc.connect(RoomId(50), Direction::North, RoomId(0)).is_err());
        assert!(!svc.does_room_exist(RoomId(50)));
        assert_eq!(svc.exit(RoomId(50), Direction::North), None);
    }

    #[test]
    fn formatted_map_marks_dangling_exits() {
        let svc = svc();
        svc.connect(RoomId(0), Direction::East, RoomId(3)).unwrap();
        svc.connect(RoomId(0), Direction::Down, RoomId(42)).unwrap();

        let dump = svc.formatted_map();
        assert!(dump.contains("east  -> 3"));
        assert!(dump.contains("down  -> 42 (missing)"));
        assert!(dump.contains("[3] Cellar\n    (no exits)"));
    }
}
