//! What the engine asks of the console around it.
//!
//! The engine never prints, never shows pictures and never touches the tracing subscriber. It
//! asks the shell to do so through [`ShellHooks`].

use std::sync::Arc;

/// Level names accepted by `LOG <level>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Some(LogLevel::Off),
            "ERROR" | "SEVERE" => Some(LogLevel::Error),
            "WARN" | "WARNING" => Some(LogLevel::Warn),
            "INFO" | "CONFIG" => Some(LogLevel::Info),
            "DEBUG" | "FINE" => Some(LogLevel::Debug),
            "TRACE" | "FINER" | "FINEST" | "ALL" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl core::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.as_filter().to_ascii_uppercase())
    }
}

/// Side effects delegated to the console shell.
pub trait ShellHooks: Send + Sync {
    /// Show the image found at `path`. Failing to do so must not affect the game.
    fn display_image(&self, path: &str);

    /// Change the active log level. Returns a short complaint when it could not.
    fn set_log_level(&self, level: LogLevel) -> Result<(), String>;
}

/// Hooks for headless use (tests, scripted runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopShell;

impl ShellHooks for NoopShell {
    fn display_image(&self, path: &str) {
        tracing::debug!(path, "image display requested (headless)");
    }

    fn set_log_level(&self, level: LogLevel) -> Result<(), String> {
        tracing::debug!(%level, "log level change requested (headless)");
        Ok(())
    }
}

pub type SharedShell = Arc<dyn ShellHooks>;
