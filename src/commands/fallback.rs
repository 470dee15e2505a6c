use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;

/// Last link: answers everything nobody else claimed.
pub struct Fallback;

impl CommandHandler for Fallback {
    fn name(&self) -> &'static str {
        "default"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &[]
    }

    fn can_handle(&self, _cmd: &PlayerCommand) -> bool {
        true
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        tracing::debug!(command = %cmd, "unknown command");
        Ok(Some(format!(
            "I don't understand the command '{}'. Try 'help' or '?' for available commands.",
            cmd.original
        )))
    }
}
