//! VSIX server - list and serve `.vsix` extension packages
//!
//! A small HTTP service over a single directory of extension
//! packages. `GET /extensions` lists every `.vsix` file in the
//! directory; `GET /extensions/{name}` downloads one as an
//! attachment. Requested names are resolved on their canonical path
//! and must stay directly inside the directory.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - catalog (directory listing, safe name resolution)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, router, error mapping
//!
//! - **cli**: clap adapter (serve, list, show-config)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalog::ExtensionCatalog;
pub use crate::core::config::Config;
pub use crate::core::error::{Result, VsixError};
pub use crate::core::types::*;
