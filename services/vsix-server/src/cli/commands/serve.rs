//! Serve command - run the HTTP server

use crate::core::catalog::ExtensionCatalog;
use crate::core::config::Config;
use crate::http;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides configuration)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Directory holding the .vsix files (overrides configuration)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.dir {
            config.storage.vsix_dir = dir.clone();
        }
    }
}

/// Execute the serve command
///
/// Runs until Ctrl-C or SIGTERM.
pub async fn execute(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting VSIX server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    config.log_config();

    if !config.storage.vsix_dir.is_dir() {
        tracing::warn!(
            "VSIX directory {:?} does not exist, listing will fail until it is created",
            config.storage.vsix_dir
        );
    }

    let catalog = Arc::new(ExtensionCatalog::new(config.storage.vsix_dir.clone()));
    let app = http::build_router(catalog);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Extension list at http://{}/extensions", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
