use crate::commands::{CommandHandler, CommandResult, join_lines, look};
use crate::input::parser::PlayerCommand;
use crate::models::types::Direction;
use crate::services::{MapService, PlayerService, RoomService, ServiceError};
use std::sync::Arc;

const VERBS: &[&str] = &[
    "N", "S", "E", "W", "U", "D", "NORTH", "SOUTH", "EAST", "WEST", "UP", "DOWN", "GO",
];

pub struct Move {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    map: Arc<MapService>,
}

impl Move {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, map: Arc<MapService>) -> Self {
        Self { player, room, map }
    }
}

impl CommandHandler for Move {
    fn name(&self) -> &'static str {
        "move"
    }

    fn verbs(&self) -> &'static [&'static str] {
        VERBS
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        // "GO <dir>" or a bare direction; "E MUG" is neither
        let dir = if cmd.verb_is(&["GO"]) {
            Direction::parse(&cmd.noun)
        } else {
            cmd.direction()
        };
        let Some(dir) = dir else {
            return Ok(Some("Usage: go <direction>".to_string()));
        };

        let here = self.player.current_room();
        let Some(to) = self.map.exit(here, dir) else {
            return Ok(Some("You can't go that way.".to_string()));
        };

        match self.player.move_to(to) {
            Ok(relocation) => {
                let mut parts = relocation.notifications();
                parts.push(look::describe_room(&self.room, to));
                Ok(Some(join_lines(parts)))
            }
            Err(ServiceError::RoomNotFound(id)) => {
                tracing::warn!(from = %here, %dir, to = %id, "exit leads to an unregistered room");
                Ok(Some(format!("The way {dir} leads nowhere (room {id} does not exist).")))
            }
            Err(e) => Err(e.into()),
        }
    }
}
