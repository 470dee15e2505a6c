use crate::commands::{CommandHandler, CommandResult, join_lines};
use crate::input::parser::PlayerCommand;
use crate::models::types::RoomId;
use crate::services::{MapService, PlayerService, RoomService, ServiceError};
use std::sync::Arc;

pub struct Teleport {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    map: Arc<MapService>,
}

impl Teleport {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, map: Arc<MapService>) -> Self {
        Self { player, room, map }
    }
}

const UNSUPPORTED: &str = "Teleportation to non-existent locations is not yet supported.";

impl CommandHandler for Teleport {
    fn name(&self) -> &'static str {
        "teleport"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["T", "TELEPORT"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        let Ok(dest) = cmd.noun.parse::<RoomId>() else {
            tracing::warn!(noun = %cmd.noun, "Invalid room ID");
            return Ok(Some("You can only teleport to a room by its ID.".to_string()));
        };

        if !self.map.does_room_exist(dest) {
            return Ok(Some(UNSUPPORTED.to_string()));
        }

        match self.player.move_to(dest) {
            Ok(relocation) => {
                tracing::info!(from = %relocation.from, to = %dest, room = ?self.room.room_name(dest), "teleported");
                let mut parts = relocation.notifications();
                parts.push(format!("Teleported to room: {}", cmd.noun));
                Ok(Some(join_lines(parts)))
            }
            Err(ServiceError::RoomNotFound(_)) => Ok(Some(UNSUPPORTED.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}
