//! Wire types shared by the HTTP and CLI adapters

use serde::{Deserialize, Serialize};

/// One `.vsix` file in the extension directory
///
/// Computed per request from a directory listing; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    /// Exact filename, suffix and case preserved
    pub name: String,

    /// Root-relative path: `/` followed by the filename
    pub url: String,
}

impl ExtensionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let url = format!("/{name}");
        Self { name, url }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
