use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::input::shell::SharedShell;
use crate::services::{PlayerService, RoomService};
use std::sync::Arc;

pub struct Display {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    shell: SharedShell,
}

impl Display {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, shell: SharedShell) -> Self {
        Self { player, room, shell }
    }
}

impl CommandHandler for Display {
    fn name(&self) -> &'static str {
        "display"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["DISPLAY", "SHOW"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        if !cmd.noun.eq_ignore_ascii_case("ROOM") {
            return Ok(Some(format!("I don't know how to DISPLAY {}.", cmd.noun)));
        }

        let here = self.player.current_room();
        match self.room.image_path(here) {
            Some(path) => self.shell.display_image(&path),
            None => tracing::warn!(room = %here, "no image to display"),
        }
        // the picture is the answer
        Ok(Some(String::new()))
    }
}
