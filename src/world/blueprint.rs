//! Extra rooms and exits read from a TOML file.
//!
//! ```toml
//! [[rooms]]
//! id = 10
//! name = "Library"
//! author = "Archivist"
//! description = "Dusty shelves."
//!
//! [[rooms.items]]
//! name = "Old Book"
//! description = "Its pages are stuck together."
//! aliases = ["Book", "Old-Book"]
//!
//! [[exits]]
//! from = 0
//! direction = "north"
//! to = 10
//! ```

use crate::error::{ConfigErrorKind, DomainError, InfraError};
use crate::models::item::SimpleItem;
use crate::models::room::{Room, RoomProvider};
use crate::models::types::{Direction, RoomId};
use crate::world::room_header;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldBlueprint {
    pub rooms: Vec<RoomBlueprint>,
    pub exits: Vec<ExitBlueprint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomBlueprint {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemBlueprint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemBlueprint {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub aliases: Vec<String>,
    #[serde(default)]
    pub anchored: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExitBlueprint {
    pub from: u32,
    pub direction: String,
    pub to: u32,
}

impl WorldBlueprint {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let config_err = |source| InfraError::Config {
            path: path.to_path_buf(),
            source,
        };

        let data = std::fs::read_to_string(path).map_err(|e| config_err(ConfigErrorKind::Read(e)))?;
        let bp = Self::parse(&data).map_err(|e| config_err(ConfigErrorKind::Parse(e)))?;
        bp.validate()?;
        Ok(bp)
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Aliases are single words and every exit names a known direction.
    pub fn validate(&self) -> Result<(), DomainError> {
        for room in &self.rooms {
            if room.name.trim().is_empty() {
                return Err(DomainError::Validation {
                    field: "rooms.name",
                    message: format!("room {} has no name", room.id),
                });
            }
            for item in &room.items {
                if item.aliases.is_empty() {
                    return Err(DomainError::Validation {
                        field: "rooms.items.aliases",
                        message: format!("'{}' has no aliases", item.name),
                    });
                }
                if let Some(bad) = item.aliases.iter().find(|a| a.is_empty() || a.contains(char::is_whitespace)) {
                    return Err(DomainError::Validation {
                        field: "rooms.items.aliases",
                        message: format!("alias '{bad}' of '{}' must be a single word", item.name),
                    });
                }
            }
        }
        for exit in &self.exits {
            Direction::parse(&exit.direction).ok_or_else(|| DomainError::InvalidDirection(exit.direction.clone()))?;
        }
        Ok(())
    }

    pub fn providers(&self) -> Vec<Box<dyn RoomProvider>> {
        self.rooms
            .iter()
            .cloned()
            .map(|r| Box::new(r) as Box<dyn RoomProvider>)
            .collect()
    }

    /// Exits with their direction parsed; unparseable ones are skipped with a warning.
    pub fn exits(&self) -> Vec<(RoomId, Direction, RoomId)> {
        self.exits
            .iter()
            .filter_map(|e| match Direction::parse(&e.direction) {
                Some(dir) => Some((RoomId(e.from), dir, RoomId(e.to))),
                None => {
                    tracing::warn!(direction = %e.direction, from = e.from, "skipping exit with unknown direction");
                    None
                }
            })
            .collect()
    }
}

impl RoomProvider for RoomBlueprint {
    fn create_room(&self) -> Room {
        let description = if self.author.is_empty() {
            self.description.clone()
        } else {
            format!("{}\n{}", room_header(&self.name, &self.author), self.description)
        };

        let mut room = Room::new(RoomId(self.id), self.name.clone())
            .with_author(self.author.clone())
            .with_description(description);
        if let Some(image) = &self.image {
            room = room.with_image(image.clone());
        }
        for item in &self.items {
            let aliases: Vec<&str> = item.aliases.iter().map(String::as_str).collect();
            let mut simple = SimpleItem::new(item.name.clone(), item.description.clone(), &aliases);
            simple.anchored = item.anchored;
            room = room.with_item(simple);
        }
        room
    }
}
