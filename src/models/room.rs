use crate::error::{AppResult, DomainError};
use crate::models::inventory::ItemContainer;
use crate::models::item::Item;
use crate::models::player::PlayerView;
use crate::models::types::RoomId;
use std::collections::BTreeMap;

/// Descriptive, mutable part of a room.
#[derive(Debug, Clone, Default)]
pub struct RoomInfo {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Resource path of an image the shell may display.
    pub image: Option<String>,
}

/// What a room wants done with a raw input line before the command chain sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntercept {
    /// Keep processing this (possibly rewritten) line.
    Continue(String),
    /// Swallow the line and answer with this text.
    Reply(String),
}

/// Optional room behaviour. Every method has a no-op default, so a room only implements the
/// notifications it cares about. Returned text is shown to the player.
pub trait RoomEvents: Send + Sync {
    fn player_entering(&mut self, _info: &mut RoomInfo, _player: &PlayerView) -> Option<String> {
        None
    }

    fn player_leaving(&mut self, _info: &mut RoomInfo, _player: &PlayerView) -> Option<String> {
        None
    }

    fn player_looking(&mut self, _info: &mut RoomInfo, _player: &PlayerView) -> Option<String> {
        None
    }

    fn intercept_input(&mut self, _info: &mut RoomInfo, line: &str) -> InputIntercept {
        InputIntercept::Continue(line.to_string())
    }
}

/// A location node.
pub struct Room {
    id: RoomId,
    pub info: RoomInfo,
    pub items: ItemContainer,
    pub characters: Vec<String>,
    events: Option<Box<dyn RoomEvents>>,
}

impl core::fmt::Debug for Room {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("info", &self.info)
            .field("items", &self.items)
            .field("characters", &self.characters)
            .field("has_events", &self.events.is_some())
            .finish()
    }
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            info: RoomInfo {
                name: name.into(),
                ..RoomInfo::default()
            },
            items: ItemContainer::new(),
            characters: Vec::new(),
            events: None,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.info.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = description.into();
        self
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.info.image = Some(path.into());
        self
    }

    pub fn with_item(mut self, item: impl Item + 'static) -> Self {
        // a fresh, unlimited container always accepts a new entry
        let _ = self.items.add(Box::new(item));
        self
    }

    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    pub fn with_events(mut self, events: impl RoomEvents + 'static) -> Self {
        self.events = Some(Box::new(events));
        self
    }

    pub fn has_events(&self) -> bool {
        self.events.is_some()
    }

    pub fn notify_entering(&mut self, player: &PlayerView) -> Option<String> {
        let events = self.events.as_mut()?;
        events.player_entering(&mut self.info, player)
    }

    pub fn notify_leaving(&mut self, player: &PlayerView) -> Option<String> {
        let events = self.events.as_mut()?;
        events.player_leaving(&mut self.info, player)
    }

    pub fn notify_looking(&mut self, player: &PlayerView) -> Option<String> {
        let events = self.events.as_mut()?;
        events.player_looking(&mut self.info, player)
    }

    pub fn intercept_input(&mut self, line: &str) -> InputIntercept {
        match self.events.as_mut() {
            Some(events) => events.intercept_input(&mut self.info, line),
            None => InputIntercept::Continue(line.to_string()),
        }
    }
}

/// Registry of rooms keyed by id. Ids are unique.
#[derive(Debug, Default)]
pub struct RoomList {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, room: Room) -> AppResult<()> {
        let id = room.id();
        if self.rooms.contains_key(&id) {
            return Err(DomainError::DuplicateRoom(id));
        }
        self.rooms.insert(id, room);
        Ok(())
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    pub fn ids(&self) -> Vec<RoomId> {
        self.rooms.keys().copied().collect()
    }
}

/// Factory for one fully configured room. World content registers itself through this.
pub trait RoomProvider: Send + Sync {
    fn create_room(&self) -> Room;
}

impl<F> RoomProvider for F
where
    F: Fn() -> Room + Send + Sync,
{
    fn create_room(&self) -> Room {
        self()
    }
}
