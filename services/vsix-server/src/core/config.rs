//! Configuration management for the VSIX server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, VsixError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the served `.vsix` files
    #[serde(default = "default_vsix_dir")]
    pub vsix_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = VsixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(VsixError::ConfigError(format!(
                "Invalid log format: '{other}'. Must be 'pretty' or 'json'."
            ))),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_vsix_dir() -> PathBuf {
    PathBuf::from("./vsix_files")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            vsix_dir: default_vsix_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VsixError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load config, preferring an explicit file path when given
    ///
    /// File lookup order:
    /// 1. `explicit` (e.g. `--config`)
    /// 2. VSIX_SERVER_CONFIG env var
    /// 3. XDG config file (~/.config/vsix-server/config.toml)
    /// 4. ./vsix-server.toml
    /// 5. Defaults
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        let xdg = XdgDirs::new();

        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("VSIX_SERVER_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("vsix-server.toml").exists() {
                Self::from_file("vsix-server.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("VSIX_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("VSIX_SERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(dir) = env::var("VSIX_SERVER_DIR") {
            self.storage.vsix_dir = PathBuf::from(dir);
        }

        if let Ok(format) = env::var("VSIX_SERVER_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(VsixError::ConfigError("Host must not be empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(VsixError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.storage.vsix_dir.as_os_str().is_empty() {
            return Err(VsixError::ConfigError(
                "VSIX directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.server.host);
        tracing::info!("  Port: {}", self.server.port);
        tracing::info!("  VSIX dir: {:?}", self.storage.vsix_dir);
        tracing::info!("  Log format: {:?}", self.logging.format);
    }
}
