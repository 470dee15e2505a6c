use crate::commands::{CommandHandler, CommandResult};
use crate::input::parser::PlayerCommand;
use crate::input::shell::{LogLevel, SharedShell};

const USAGE: &str = "Usage: LOG ( OFF | ERROR | WARN | INFO | DEBUG | TRACE )";

pub struct LogLevelCmd {
    shell: SharedShell,
}

impl LogLevelCmd {
    pub fn new(shell: SharedShell) -> Self {
        Self { shell }
    }
}

impl CommandHandler for LogLevelCmd {
    fn name(&self) -> &'static str {
        "log"
    }

    fn verbs(&self) -> &'static [&'static str] {
        &["LOG"]
    }

    fn handle(&self, cmd: &PlayerCommand) -> CommandResult {
        if !cmd.has_noun() {
            return Ok(Some(USAGE.to_string()));
        }
        let Some(level) = LogLevel::parse(&cmd.noun) else {
            return Ok(Some(format!("Unknown log level '{}'.\n{USAGE}", cmd.noun)));
        };

        let out = match self.shell.set_log_level(level) {
            Ok(()) => format!("Log level set to {level}."),
            Err(reason) => {
                tracing::warn!(%level, %reason, "log level change failed");
                format!("Could not change the log level: {reason}")
            }
        };
        Ok(Some(out))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testkit::kit;

    #[test]
    fn log_levels() {
        let k = kit();
        assert_eq!(k.run("log finest").as_deref(), Some("Log level set to TRACE."));
        assert_eq!(k.run("log warning").as_deref(), Some("Log level set to WARN."));
        assert!(k.run("log").unwrap().starts_with("Usage: LOG"));
        assert!(k.run("log loud").unwrap().starts_with("Unknown log level 'LOUD'."));
    }
}
