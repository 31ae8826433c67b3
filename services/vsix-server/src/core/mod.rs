//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the
//! HTTP and CLI adapters.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Wire records
//! - **xdg**: XDG config directory handling
//! - **catalog**: Directory listing and safe name resolution

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use catalog::ExtensionCatalog;
pub use config::Config;
pub use error::{Result, VsixError};
