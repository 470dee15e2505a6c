use crate::commands::{HandlerChain, WiringError};
use crate::config::Config;
use crate::error::DomainError;
use crate::input::interpreter::{CommandInterpreter, Response};
use crate::input::shell::SharedShell;
use crate::models::player::Player;
use crate::models::room::RoomProvider;
use crate::models::types::RoomId;
use crate::services::{ItemService, MapService, PlayerService, RoomService};
use crate::state::world::{SharedWorld, World, shared};
use crate::world::{self, blueprint::WorldBlueprint};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Wiring(#[from] WiringError),

    #[error("could not load world: {0}")]
    World(#[from] DomainError),
}

pub struct Services {
    pub player: Arc<PlayerService>,
    pub room: Arc<RoomService>,
    pub item: Arc<ItemService>,
    pub map: Arc<MapService>,
}

/// One game session: the world, the services over it and the interpreter in front of them.
pub struct Registry {
    pub config: Arc<Config>,
    pub world: SharedWorld,
    pub services: Arc<Services>,
    pub interpreter: CommandInterpreter,
}

impl Registry {
    /// Built-in rooms, plus the rooms and exits of `config.world_file` when set.
    pub fn new(config: Arc<Config>, shell: SharedShell) -> Result<Self, StartupError> {
        let mut providers = world::providers();
        let mut exits = Vec::new();

        if let Some(path) = &config.world_file {
            let bp = WorldBlueprint::load(path)?;
            tracing::info!(path = %path.display(), rooms = bp.rooms.len(), exits = bp.exits.len(), "world file loaded");
            providers.extend(bp.providers());
            exits = bp.exits();
        }

        let registry = Self::with_providers(config, shell, providers)?;
        for (from, dir, to) in exits {
            if let Err(e) = registry.services.map.connect(from, dir, to) {
                tracing::warn!(%from, %dir, %to, error = %e, "world file exit skipped");
            }
        }
        Ok(registry)
    }

    /// Register the diagnostic room, then `providers` in order, then the built-in exits.
    pub fn with_providers(
        config: Arc<Config>,
        shell: SharedShell,
        providers: Vec<Box<dyn RoomProvider>>,
    ) -> Result<Self, StartupError> {
        let player = Player::new(
            config.player_name.clone(),
            RoomId(config.start_room),
            config.inventory_capacity,
        );
        let world = shared(World::new(player));

        let services = Arc::new(Services {
            player: Arc::new(PlayerService::new(world.clone())),
            room: Arc::new(RoomService::new(world.clone())),
            item: Arc::new(ItemService::new(world.clone())),
            map: Arc::new(MapService::new(world.clone())),
        });

        let debug_room = RoomId(config.debug_room_id);
        services.room.add_room(world::testing_room(debug_room))?;

        for provider in providers {
            let room = provider.create_room();
            let name = room.info.name.clone();
            if let Err(e) = services.room.add_room(room) {
                tracing::warn!(%name, error = %e, "room rejected");
            }
        }

        world::wire_map(&services.map);

        if !services.room.is_room_present(RoomId(config.start_room)) {
            tracing::warn!(room = config.start_room, "start room is not registered");
        }

        let chain = HandlerChain::builder()
            .player_service(services.player.clone())
            .room_service(services.room.clone())
            .item_service(services.item.clone())
            .map_service(services.map.clone())
            .shell(shell)
            .build()?;

        let interpreter = CommandInterpreter::new(services.player.clone(), services.room.clone(), chain);

        Ok(Self {
            config,
            world,
            services,
            interpreter,
        })
    }

    pub fn process_command(&self, raw: &str) -> Option<Response> {
        self.interpreter.process_command(Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::shell::NoopShell;
    use crate::models::room::Room;

    fn registry(providers: Vec<Box<dyn RoomProvider>>) -> Registry {
        Registry::with_providers(Arc::new(Config::default()), Arc::new(NoopShell), providers).unwrap()
    }

    #[test]
    fn default_world_has_lobby_fire_room_and_diagnostic_room() {
        let r = Registry::new(Arc::new(Config::default()), Arc::new(NoopShell)).unwrap();
        assert_eq!(r.services.room.room_ids(), vec![RoomId(0), RoomId(3), RoomId(99)]);
        assert_eq!(r.services.map.exit(RoomId(0), crate::models::types::Direction::East), Some(RoomId(3)));
        assert_eq!(r.services.player.current_room(), RoomId(0));
    }

    #[test]
    fn first_registration_wins() {
        let first = || Room::new(RoomId(5), "First");
        let second = || Room::new(RoomId(5), "Second");
        let r = registry(vec![Box::new(first), Box::new(second)]);
        assert_eq!(r.services.room.room_name(RoomId(5)).as_deref(), Some("First"));
    }

    #[test]
    fn provider_cannot_replace_the_diagnostic_room() {
        let impostor = || Room::new(RoomId(99), "Impostor");
        let r = registry(vec![Box::new(impostor)]);
        assert_eq!(
            r.services.room.room_name(RoomId(99)).as_deref(),
            Some(world::TESTING_ROOM_NAME)
        );
    }
}
