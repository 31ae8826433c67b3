//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod config;
pub mod list;
pub mod serve;

// Re-export argument types for use in mod.rs
pub use config::ConfigArgs;
pub use list::ListArgs;
pub use serve::ServeArgs;
