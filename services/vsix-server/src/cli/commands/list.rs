//! List command - print the extensions the server would list

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::catalog::ExtensionCatalog;
use crate::core::config::Config;
use crate::core::types::ExtensionRecord;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Directory to list (overrides configuration)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,
}

impl ListArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.storage.vsix_dir = dir.clone();
        }
    }
}

/// Execute the list command
pub async fn execute(
    config: &Config,
    format: OutputFormat,
) -> Result<Vec<ExtensionRecord>, Box<dyn std::error::Error>> {
    let catalog = ExtensionCatalog::new(config.storage.vsix_dir.clone());
    let records = catalog.list().await?;

    match format {
        OutputFormat::Human => {
            output::print_header(&format!(
                "{} in {}",
                output::count_label(records.len(), "extension"),
                catalog.dir().display()
            ));
            for record in &records {
                println!(
                    "  {}  {}",
                    colors::file_name(&record.name),
                    colors::url(&record.url)
                );
            }
        }
        OutputFormat::Json => output::print_json(&records)?,
    }

    Ok(records)
}
