use clap::Parser;
use questline::{LogLevel, Registry, Response, ShellHooks, config::Config, util::boxify_text};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, reload};

type FilterHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file. Without it the environment (and `.env`) is used.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial log level (off, error, warn, info, debug, trace).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = init_tracing(args.log.as_deref())?;

    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    tracing::debug!(?cfg, "configuration loaded");

    let shell = Arc::new(ConsoleShell { filter });
    let registry = Registry::new(Arc::new(cfg), shell)?;

    println!("{}", boxify_text("Questline\nType 'help' for commands, 'quit' to leave."));
    print_response(registry.process_command("LOOK"));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if matches!(line.trim().to_ascii_uppercase().as_str(), "QUIT" | "EXIT") {
            break;
        }
        print_response(registry.process_command(&line));
    }

    println!("Goodbye.");
    Ok(())
}

fn print_response(response: Option<Response>) {
    if let Some(Response::Text(text)) = response {
        println!("{text}");
    }
}

/// Console side of the engine's shell hooks.
struct ConsoleShell {
    filter: FilterHandle,
}

impl ShellHooks for ConsoleShell {
    fn display_image(&self, path: &str) {
        if std::path::Path::new(path).exists() {
            println!("[image: {path}]");
        } else {
            tracing::warn!(path, "image not found");
        }
    }

    fn set_log_level(&self, level: LogLevel) -> Result<(), String> {
        self.filter
            .reload(EnvFilter::new(level.as_filter()))
            .map_err(|e| e.to_string())
    }
}

fn init_tracing(level: Option<&str>) -> anyhow::Result<FilterHandle> {
    use tracing_subscriber::prelude::*;

    color_eyre::install().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let filter = match level.map(|l| LogLevel::parse(l).ok_or_else(|| anyhow::anyhow!("unknown log level '{l}'"))) {
        Some(level) => EnvFilter::new(level?.as_filter()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(handle)
}
