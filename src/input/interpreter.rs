use crate::commands::HandlerChain;
use crate::input::parser::{PlayerCommand, normalize};
use crate::models::room::InputIntercept;
use crate::services::{PlayerService, RoomService};
use std::sync::Arc;

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this.
    Text(String),
    /// Handled; print nothing.
    Silent,
}

impl Response {
    fn from_text(text: String) -> Self {
        if text.is_empty() { Response::Silent } else { Response::Text(text) }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Response::Text(t) => Some(t),
            Response::Silent => None,
        }
    }
}

/// Turns raw lines into responses: room interception, normalization, tokenization, dispatch.
pub struct CommandInterpreter {
    player: Arc<PlayerService>,
    room: Arc<RoomService>,
    chain: HandlerChain,
}

impl CommandInterpreter {
    pub fn new(player: Arc<PlayerService>, room: Arc<RoomService>, chain: HandlerChain) -> Self {
        Self { player, room, chain }
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    /// `None` for missing or blank input; otherwise the chain's answer.
    pub fn process_command(&self, raw: Option<&str>) -> Option<Response> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }

        let line = match self.room.intercept_input(self.player.current_room(), raw) {
            InputIntercept::Reply(reply) => return Some(Response::from_text(reply)),
            InputIntercept::Continue(line) => line,
        };

        let cmd = PlayerCommand::tokenize(&normalize(&line))?;
        tracing::trace!(verb = %cmd.verb, noun = %cmd.noun, "dispatching");
        self.chain.dispatch(&cmd).map(Response::from_text)
    }
}
