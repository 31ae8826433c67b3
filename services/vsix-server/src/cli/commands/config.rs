//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the show-config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub async fn execute(
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!(
                "    port: {}",
                colors::number(&config.server.port.to_string())
            );
            println!("  storage:");
            println!(
                "    vsix_dir: {}",
                colors::url(&config.storage.vsix_dir.display().to_string())
            );
            println!("  logging:");
            println!(
                "    format: {}",
                colors::dim(&format!("{:?}", config.logging.format).to_lowercase())
            );
        }
        OutputFormat::Json => output::print_json(config)?,
    }

    Ok(())
}
