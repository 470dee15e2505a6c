use parking_lot::Mutex;
use questline::config::Config;
use questline::models::player::PlayerView;
use questline::models::room::{Room, RoomEvents, RoomInfo, RoomProvider};
use questline::models::types::RoomId;
use questline::services::ContainerRef;
use questline::{NoopShell, Registry, Response};
use std::sync::Arc;

fn default_world() -> Registry {
    Registry::new(Arc::new(Config::default()), Arc::new(NoopShell)).unwrap()
}

fn say(r: &Registry, line: &str) -> String {
    match r.process_command(line) {
        Some(Response::Text(t)) => t,
        other => panic!("expected text for {line:?}, got {other:?}"),
    }
}

#[test]
fn take_mug_from_the_lobby() {
    let r = default_world();
    assert_eq!(say(&r, "TAKE MUG"), "You picked up the Mug");

    let items = &r.services.item;
    assert!(items.find(ContainerRef::Inventory, "MUG").is_some());
    assert!(items.find(ContainerRef::Room(RoomId(0)), "MUG").is_none());
    assert_eq!(say(&r, "i"), "Inventory:\n  - Mug");
}

#[test]
fn drop_all_with_empty_hands() {
    let r = default_world();
    assert_eq!(say(&r, "DROP ALL"), "You're not holding anything to drop.");
}

#[test]
fn teleport_into_the_testing_room_and_back() {
    let r = default_world();

    assert_eq!(
        say(&r, "T 99"),
        "Beware!!! You're entering a secret testing room (99) from room 00\nTeleported to room: 99"
    );
    assert_eq!(r.services.player.current_room(), RoomId(99));
    assert_eq!(r.services.player.previous_room(), RoomId(0));

    assert_eq!(
        say(&r, "t 0"),
        "Goodbye!  (Player leaving for room 00)\nTeleported to room: 0"
    );
    assert_eq!(r.services.player.previous_room(), RoomId(99));
}

#[test]
fn teleport_to_unregistered_room() {
    let r = default_world();
    assert_eq!(
        say(&r, "T 500"),
        "Teleportation to non-existent locations is not yet supported."
    );
    assert_eq!(r.services.player.current_room(), RoomId(0));
}

#[test]
fn unknown_verb() {
    let r = default_world();
    assert_eq!(
        say(&r, "FOO BAR"),
        "I don't understand the command 'FOO BAR'. Try 'help' or '?' for available commands."
    );
}

#[test]
fn blank_lines_are_ignored() {
    let r = default_world();
    assert_eq!(r.process_command(""), None);
    assert_eq!(r.process_command("  \t "), None);
    assert_eq!(r.interpreter.process_command(None), None);
}

struct Journal {
    tag: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl RoomEvents for Journal {
    fn player_entering(&mut self, _info: &mut RoomInfo, p: &PlayerView) -> Option<String> {
        self.log.lock().push(format!("enter {} ({} -> {})", self.tag, p.previous_room, p.current_room));
        None
    }

    fn player_leaving(&mut self, _info: &mut RoomInfo, p: &PlayerView) -> Option<String> {
        self.log.lock().push(format!("leave {} ({} -> {})", self.tag, p.previous_room, p.current_room));
        None
    }
}

#[test]
fn leave_is_announced_before_enter() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (log.clone(), log.clone());
    let providers: Vec<Box<dyn RoomProvider>> = vec![
        Box::new(move || Room::new(RoomId(0), "Start").with_events(Journal { tag: "start", log: a.clone() })),
        Box::new(move || Room::new(RoomId(7), "Target").with_events(Journal { tag: "target", log: b.clone() })),
    ];
    let r = Registry::with_providers(Arc::new(Config::default()), Arc::new(NoopShell), providers).unwrap();

    assert_eq!(say(&r, "teleport 7"), "Teleported to room: 7");
    assert_eq!(
        log.lock().as_slice(),
        ["leave start (0 -> 7)".to_string(), "enter target (0 -> 7)".to_string()]
    );
}

#[test]
fn walk_east_into_the_fire_room() {
    let r = default_world();
    let out = say(&r, "east");
    assert!(out.starts_with("+-"), "{out}");
    assert!(out.contains("sweltering"), "{out}");
    assert!(out.ends_with("You See:\n  Eternal Fire Sword"), "{out}");
    assert_eq!(r.services.player.current_room(), RoomId(3));

    assert_eq!(say(&r, "n"), "You can't go that way.");
    say(&r, "go w");
    assert_eq!(r.services.player.current_room(), RoomId(0));
}

#[test]
fn info_is_only_intercepted_in_the_testing_room() {
    let r = default_world();
    assert!(say(&r, "info").starts_with("I don't understand the command 'INFO'"));

    say(&r, "T 99");
    assert_eq!(say(&r, "info"), "This is not an information kiosk!");
    assert_eq!(r.services.player.current_room(), RoomId(99));
}

#[test]
fn log_level_through_the_headless_shell() {
    let r = default_world();
    assert_eq!(say(&r, "log fine"), "Log level set to DEBUG.");
    assert!(say(&r, "log").starts_with("Usage: LOG"));
}

#[test]
fn show_room_is_silent() {
    let r = default_world();
    say(&r, "T 99");
    assert_eq!(r.process_command("show room"), Some(Response::Silent));
    assert_eq!(say(&r, "show sky"), "I don't know how to DISPLAY SKY.");
}

#[test]
fn direction_followed_by_a_noun_stays_put() {
    let r = default_world();
    assert_eq!(say(&r, "E MUG"), "Usage: go <direction>");
    assert_eq!(r.services.player.current_room(), RoomId(0));
    assert!(r.services.item.find(ContainerRef::Room(RoomId(0)), "MUG").is_some());
}
