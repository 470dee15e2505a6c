use crate::error::{AppResult, DomainError};
use crate::models::types::{Direction, RoomId};
use std::collections::BTreeMap;

/// Directed graph of room connectivity: room id -> (direction -> destination room id).
///
/// A node exists for every registered room. Edge destinations are not checked on insertion;
/// callers ask [`GameMap::contains`] when someone actually tries to go there.
#[derive(Debug, Default, Clone)]
pub struct GameMap {
    nodes: BTreeMap<RoomId, BTreeMap<Direction, RoomId>>,
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, id: RoomId) {
        self.nodes.entry(id).or_default();
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add (or replace) a one-way exit. The source must already be a node; returns the replaced
    /// destination, if any.
    pub fn connect(&mut self, from: RoomId, dir: Direction, to: RoomId) -> AppResult<Option<RoomId>> {
        let exits = self.nodes.get_mut(&from).ok_or(DomainError::RoomNotFound(from))?;
        Ok(exits.insert(dir, to))
    }

    pub fn exit(&self, from: RoomId, dir: Direction) -> Option<RoomId> {
        self.nodes.get(&from).and_then(|exits| exits.get(&dir)).copied()
    }

    pub fn exits(&self, from: RoomId) -> BTreeMap<Direction, RoomId> {
        self.nodes.get(&from).cloned().unwrap_or_default()
    }

    pub fn room_ids(&self) -> Vec<RoomId> {
        self.nodes.keys().copied().collect()
    }
}
