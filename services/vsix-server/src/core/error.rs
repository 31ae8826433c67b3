//! Error types and error handling for the VSIX server.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the `http` adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for VSIX server operations
pub type Result<T> = std::result::Result<T, VsixError>;

/// Main error type for the VSIX server
#[derive(Error, Debug)]
pub enum VsixError {
    /// The configured extension directory does not exist
    #[error("VSIX directory not found")]
    DirectoryNotFound(PathBuf),

    /// The requested name has the wrong suffix, escapes the directory,
    /// or does not resolve to a regular file inside it
    #[error("Extension not found: {0}")]
    ExtensionNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VsixError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, VsixError::ExtensionNotFound(_))
    }

    /// Check if the extension directory itself is missing
    pub fn is_directory_missing(&self) -> bool {
        matches!(self, VsixError::DirectoryNotFound(_))
    }
}
