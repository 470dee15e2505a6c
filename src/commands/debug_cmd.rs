use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::services::{MapService, PlayerService, RoomService};
use std::sync::Arc;

pub struct DebugCmd {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    map: Arc<MapService>,
}

impl DebugCmd {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, map: Arc<MapService>) -> Self {
        Self { player, room, map }
    }
}

impl CommandHandler for DebugCmd {
    fn name(&self) -> &'static str {
        "debug"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["DEBUG"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let out = match cmd.noun.as_str() {
            "ROOM" => self
                .room
                .debug_room_info(self.player.current_room(), &self.player.formatted_inventory()),
            "MAP" => self.map.formatted_map(),
            other => format!("I don't know how to DEBUG {other}."),
        };
        Ok(Some(out))
    }
}
