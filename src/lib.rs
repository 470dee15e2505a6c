pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod services;
pub mod state;
pub mod util;
pub mod world;

// Convenient re-exports (so call sites can do `questline::Registry`, etc.)
pub use input::interpreter::{CommandInterpreter, Response};
pub use input::shell::{LogLevel, NoopShell, ShellHooks};
pub use state::registry::{Registry, StartupError};
