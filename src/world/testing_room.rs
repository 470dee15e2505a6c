//! The always-present diagnostic room and the map that lives in it.

use crate::models::item::{InteractionEvent, InteractionKind, InteractionResult, Item};
use crate::models::player::PlayerView;
use crate::models::room::{InputIntercept, Room, RoomEvents, RoomInfo};
use crate::models::types::RoomId;

const BASE_DESCRIPTION: &str = "This is just a room for testing purposes.";
const FIRST_VISIT: &str = "Nothing to see here, please move along.\n(Sometimes, the game may lie to you!).";

pub const TESTING_ROOM_NAME: &str = "Secret Testing Room";
pub const TESTING_ROOM_IMAGE: &str = "assets/secret_testing_room.png";

/// Build the diagnostic room with the given id.
pub fn testing_room(id: RoomId) -> Room {
    Room::new(id, TESTING_ROOM_NAME)
        .with_author("Engine Maintainers")
        .with_description(format!("{BASE_DESCRIPTION}\n{FIRST_VISIT}"))
        .with_image(TESTING_ROOM_IMAGE)
        .with_item(TestingMap::new())
        .with_events(TestingRoomEvents)
}

pub struct TestingRoomEvents;

impl RoomEvents for TestingRoomEvents {
    fn player_entering(&mut self, _info: &mut RoomInfo, player: &PlayerView) -> Option<String> {
        Some(format!(
            "Beware!!! You're entering a secret testing room ({:02}) from room {:02}",
            player.current_room.0, player.previous_room.0
        ))
    }

    fn player_leaving(&mut self, info: &mut RoomInfo, player: &PlayerView) -> Option<String> {
        info.description = BASE_DESCRIPTION.to_string();
        Some(format!(
            "Goodbye!  (Player leaving for room {:02})",
            player.current_room.0
        ))
    }

    fn intercept_input(&mut self, _info: &mut RoomInfo, line: &str) -> InputIntercept {
        if line.trim().eq_ignore_ascii_case("info") {
            return InputIntercept::Reply("This is not an information kiosk!".to_string());
        }
        InputIntercept::Continue(line.to_string())
    }
}

/// A map that refuses to be picked up the first time.
#[derive(Debug)]
pub struct TestingMap {
    name: String,
    description: String,
    held: bool,
    pickup_attempts: u32,
}

impl TestingMap {
    pub fn new() -> Self {
        Self {
            name: "The GameMap".to_string(),
            description: "A folded map of the game world.".to_string(),
            held: false,
            pickup_attempts: 0,
        }
    }
}

impl Default for TestingMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Item for TestingMap {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn full_description(&self) -> String {
        self.description.clone()
    }

    fn aliases(&self) -> Vec<String> {
        vec!["Map".to_string(), "Game-Map".to_string()]
    }

    fn interact(&mut self, event: &InteractionEvent<'_>) -> InteractionResult {
        match event.kind {
            InteractionKind::Get if self.pickup_attempts == 0 => {
                self.pickup_attempts = 1;
                self.name = "Discarded Map".to_string();
                InteractionResult::failure("The map slips through your fingers. Maybe you should try again!")
            }
            InteractionKind::Get => {
                self.held = true;
                self.name = "Game Map".to_string();
                InteractionResult::success("The map has been taken!")
            }
            InteractionKind::Drop => {
                self.held = false;
                InteractionResult::success("You'll be lost without me!!! (The map is dropped.)")
            }
            InteractionKind::Use if self.held => {
                self.description = "A map that appears to have been refolded with great frustration.".to_string();
                InteractionResult::success("You successfully use the map.")
            }
            InteractionKind::Use => InteractionResult::failure("You must be holding the map to use it!"),
            InteractionKind::Inspect if self.held => {
                self.description = "A thoroughly inspected map.".to_string();
                InteractionResult::success("You inspect the map.")
            }
            InteractionKind::Inspect => InteractionResult::failure("You must be holding the map to inspect it!"),
            InteractionKind::Look => InteractionResult::ok(),
            _ => InteractionResult::failure("The testing map does not respond to that action."),
        }
    }

    fn get_undone(&mut self) {
        self.held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parser::PlayerCommand;

    fn view(current: u32, previous: u32) -> PlayerView {
        PlayerView {
            name: "Ada".into(),
            current_room: RoomId(current),
            previous_room: RoomId(previous),
        }
    }

    #[test]
    fn map_needs_two_tries() {
        let cmd = PlayerCommand::parse("GET MAP").unwrap();
        let p = view(99, 0);
        let mut map = TestingMap::new();

        let first = map.interact(&InteractionEvent::new(InteractionKind::Get, &cmd, &p));
        assert!(!first.success);
        assert_eq!(map.display_name(), "Discarded Map");

        let second = map.interact(&InteractionEvent::new(InteractionKind::Get, &cmd, &p));
        assert!(second.success);
        assert_eq!(map.display_name(), "Game Map");
    }

    #[test]
    fn use_only_while_held() {
        let cmd = PlayerCommand::parse("USE MAP").unwrap();
        let p = view(99, 0);
        let mut map = TestingMap::new();

        assert!(!map.interact(&InteractionEvent::new(InteractionKind::Use, &cmd, &p)).success);
        map.held = true;
        assert!(map.interact(&InteractionEvent::new(InteractionKind::Use, &cmd, &p)).success);
        assert!(map.full_description().contains("frustration"));
    }

    #[test]
    fn undone_get_leaves_the_map_unheld() {
        let cmd = PlayerCommand::parse("GET MAP").unwrap();
        let p = view(99, 0);
        let mut map = TestingMap::new();
        map.interact(&InteractionEvent::new(InteractionKind::Get, &cmd, &p));
        assert!(map.interact(&InteractionEvent::new(InteractionKind::Get, &cmd, &p)).success);
        assert!(map.held);

        map.get_undone();
        assert!(!map.held);
        let use_cmd = PlayerCommand::parse("USE MAP").unwrap();
        assert!(!map.interact(&InteractionEvent::new(InteractionKind::Use, &use_cmd, &p)).success);
    }

    #[test]
    fn room_greets_and_resets() {
        let mut room = testing_room(RoomId(99));
        assert_eq!(
            room.notify_entering(&view(99, 3)).as_deref(),
            Some("Beware!!! You're entering a secret testing room (99) from room 03")
        );
        assert_eq!(
            room.notify_leaving(&view(0, 99)).as_deref(),
            Some("Goodbye!  (Player leaving for room 00)")
        );
        assert_eq!(room.info.description, BASE_DESCRIPTION);
        assert_eq!(
            room.intercept_input(" Info "),
            InputIntercept::Reply("This is not an information kiosk!".into())
        );
    }
}
