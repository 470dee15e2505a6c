use crate::error::{ConfigErrorKind, InfraError};
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_name: String,              // e.g. "Player"
    pub start_room: u32,                  // e.g. 0
    pub debug_room_id: u32,               // e.g. 99
    pub inventory_capacity: Option<usize>,
    pub world_file: Option<PathBuf>,      // extra rooms, see world::blueprint
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            start_room: 0,
            debug_room_id: 99,
            inventory_capacity: None,
            world_file: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Parse(e),
        })?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unset variables keep their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let cfg = Self {
            player_name: var("QUESTLINE_PLAYER").unwrap_or(defaults.player_name),
            start_room: parse_var(&var, "QUESTLINE_START_ROOM")?.unwrap_or(defaults.start_room),
            debug_room_id: parse_var(&var, "QUESTLINE_DEBUG_ROOM")?.unwrap_or(defaults.debug_room_id),
            inventory_capacity: parse_var(&var, "QUESTLINE_INVENTORY_CAPACITY")?,
            world_file: var("QUESTLINE_WORLD_FILE").map(PathBuf::from),
        };

        Ok(cfg)
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, InfraError> {
    match var(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| InfraError::Config {
            path: PathBuf::from(".env"),
            source: ConfigErrorKind::InvalidEnv(key.to_string(), raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(cfg.player_name, "Player");
        assert_eq!(cfg.start_room, 0);
        assert_eq!(cfg.debug_room_id, 99);
        assert!(cfg.inventory_capacity.is_none());
        assert!(cfg.world_file.is_none());
    }

    #[test]
    fn reads_environment_overrides() {
        let cfg = Config::from_vars(vars(&[
            ("QUESTLINE_PLAYER", "Ada"),
            ("QUESTLINE_START_ROOM", "3"),
            ("QUESTLINE_INVENTORY_CAPACITY", "2"),
            ("QUESTLINE_WORLD_FILE", "world.toml"),
        ]))
        .unwrap();
        assert_eq!(cfg.player_name, "Ada");
        assert_eq!(cfg.start_room, 3);
        assert_eq!(cfg.inventory_capacity, Some(2));
        assert_eq!(cfg.world_file, Some(PathBuf::from("world.toml")));
    }

    #[test]
    fn invalid_number_is_a_config_error() {
        let err = Config::from_vars(vars(&[("QUESTLINE_DEBUG_ROOM", "ninety")])).unwrap_err();
        let infra = err.downcast_ref::<InfraError>().unwrap();
        assert!(matches!(
            infra,
            InfraError::Config {
                source: ConfigErrorKind::InvalidEnv(key, _),
                ..
            } if key == "QUESTLINE_DEBUG_ROOM"
        ));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str("player_name = \"Ada\"\ninventory_capacity = 5\n").unwrap();
        assert_eq!(cfg.player_name, "Ada");
        assert_eq!(cfg.inventory_capacity, Some(5));
        assert_eq!(cfg.debug_room_id, 99);
    }
}
