//! CLI adapter for the VSIX server
//!
//! Parses arguments, loads configuration, initializes logging and
//! dispatches to a command. `serve` wires the HTTP adapter; `list`
//! and `show-config` only touch `core/`.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::{Config, LogFormat};
use crate::core::xdg::XdgDirs;

/// Default filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "vsix_server=info";

/// VSIX server - list and download .vsix extension packages over HTTP
#[derive(Parser, Debug)]
#[command(name = "vsix-server")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Serve .vsix extension packages from a directory", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(commands::ServeArgs),

    /// Print the extensions found in the directory
    List(commands::ListArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so `list --format json` output stays clean.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        output::print_error(&format!("Logging already initialized: {e}"));
    }
}

/// Log where configuration was looked up
///
/// Called once the subscriber is installed; config loading itself
/// runs before logging exists and stays silent.
pub fn log_config_sources(cli_config: Option<&std::path::Path>) {
    if let Some(path) = cli_config {
        tracing::debug!("  Config file (--config): {:?}", path);
    }
    XdgDirs::new().log_paths();
}

/// Build the effective configuration for a command
///
/// Priority: CLI flags > env vars > TOML > defaults.
pub fn resolve_config(
    cli_config: Option<&std::path::Path>,
    command: &Commands,
) -> crate::Result<Config> {
    let mut config = Config::load_from(cli_config)?;

    match command {
        Commands::Serve(args) => args.apply(&mut config),
        Commands::List(args) => args.apply(&mut config),
        Commands::ShowConfig(_) => {}
    }

    config.validate()?;
    Ok(config)
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(commands::ServeArgs::default()));

    let config = resolve_config(cli.config.as_deref(), &command)?;
    init_logging(config.logging.format);
    log_config_sources(cli.config.as_deref());

    match command {
        Commands::Serve(_) => commands::serve::execute(&config).await,
        Commands::List(_) => commands::list::execute(&config, cli.format)
            .await
            .map(|_| ()),
        Commands::ShowConfig(_) => commands::config::execute(&config, cli.format).await,
    }
}
