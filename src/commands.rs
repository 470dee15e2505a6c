use crate::input::parser::PlayerCommand;
use crate::input::shell::{NoopShell, SharedShell};
use crate::services::{ItemService, MapService, PlayerService, RoomService, ServiceError};
use std::sync::Arc;
use thiserror::Error;

mod debug_cmd;
mod display;
mod drop;
mod fallback;
mod go;
mod help;
mod interact;
mod inventory;
mod log_level;
mod look;
mod take;
mod teleport;

/// `Ok(None)` passes the command on to the next handler; `Ok(Some(""))` means handled, nothing to say.
pub type CommandResult<T = Option<String>> = Result<T, CommandError>;

/// A link in the handler chain.
pub trait CommandHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Verbs this handler owns.
    fn verbs(&self) -> &'static [&'static str];

    fn can_handle(&self, cmd: &PlayerCommand) -> bool {
        cmd.verb_is(self.verbs())
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult;
}

//noinspection RsExternalLinter
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Raised while wiring the chain. The only fatal error in the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WiringError {
    #[error("{0} service must be set")]
    MissingService(&'static str),
}

/// Ordered handlers; the first one that claims a command answers it.
pub struct HandlerChain {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl HandlerChain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::default()
    }

    /// Handler names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Name of the handler that would answer `cmd`.
    pub fn owner(&self, cmd: &PlayerCommand) -> Option<&'static str> {
        self.handlers.iter().find(|h| h.can_handle(cmd)).map(|h| h.name())
    }

    /// Walk the chain. Handler errors become a line of text; `None` only if nobody answered.
    pub fn dispatch(&self, cmd: &PlayerCommand) -> Option<String> {
        for handler in self.handlers.iter().filter(|h| h.can_handle(cmd)) {
            match handler.handle(cmd) {
                Ok(Some(response)) => {
                    tracing::debug!(handler = handler.name(), verb = %cmd.verb, "command handled");
                    return Some(response);
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(handler = handler.name(), error = %e, command = %cmd, "handler failed");
                    return Some(format!("Something went wrong: {e}"));
                }
            }
        }

        tracing::error!(command = %cmd, "no handler answered the command");
        None
    }
}

/// Collects the services every handler depends on, then builds the chain in its fixed order.
#[derive(Default)]
pub struct ChainBuilder {
    player: Option<Arc<PlayerService>>,
    room: Option<Arc<RoomService>>,
    item: Option<Arc<ItemService>>,
    map: Option<Arc<MapService>>,
    shell: Option<SharedShell>,
}

impl ChainBuilder {
    pub fn player_service(mut self, svc: Arc<PlayerService>) -> Self {
        self.player = Some(svc);
        self
    }

    pub fn room_service(mut self, svc: Arc<RoomService>) -> Self {
        self.room = Some(svc);
        self
    }

    pub fn item_service(mut self, svc: Arc<ItemService>) -> Self {
        self.item = Some(svc);
        self
    }

    pub fn map_service(mut self, svc: Arc<MapService>) -> Self {
        self.map = Some(svc);
        self
    }

    /// Console hooks for image display and log level. Headless when not set.
    pub fn shell(mut self, shell: SharedShell) -> Self {
        self.shell = Some(shell);
        self
    }

    pub fn build(self) -> Result<HandlerChain, WiringError> {
        let player = self.player.ok_or(WiringError::MissingService("Player"))?;
        let room = self.room.ok_or(WiringError::MissingService("Room"))?;
        let item = self.item.ok_or(WiringError::MissingService("Item"))?;
        let map = self.map.ok_or(WiringError::MissingService("Map"))?;
        let shell = self.shell.unwrap_or_else(|| Arc::new(NoopShell));

        // Movement first, so a direction is never taken for an item alias.
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(go::Move::new(player.clone(), room.clone(), map.clone())),
            Box::new(inventory::Inventory::new(player.clone())),
            Box::new(help::Help),
            Box::new(take::Take::new(player.clone(), room.clone(), item.clone())),
            Box::new(drop::DropCmd::new(player.clone(), room.clone(), item.clone())),
            Box::new(look::Look::new(player.clone(), room.clone(), item.clone())),
            Box::new(display::Display::new(player.clone(), room.clone(), shell.clone())),
            Box::new(teleport::Teleport::new(player.clone(), room.clone(), map.clone())),
            Box::new(debug_cmd::DebugCmd::new(player.clone(), room.clone(), map)),
            Box::new(log_level::LogLevelCmd::new(shell)),
            Box::new(interact::Interact::new(player, item)),
            Box::new(fallback::Fallback),
        ];

        Ok(HandlerChain { handlers })
    }
}

/// Newline-join the non-empty parts of a response.
pub(crate) fn join_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
