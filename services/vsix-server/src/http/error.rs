//! HTTP status mapping for `VsixError`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::VsixError;

impl VsixError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            VsixError::ExtensionNotFound(_) => StatusCode::NOT_FOUND,
            VsixError::DirectoryNotFound(_)
            | VsixError::ConfigError(_)
            | VsixError::IoError(_)
            | VsixError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Not-found carries no body; a missing directory reports its fixed
/// message; everything else is logged and reported generically.
impl IntoResponse for VsixError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            VsixError::ExtensionNotFound(_) => status.into_response(),
            VsixError::DirectoryNotFound(dir) => {
                tracing::error!(dir = %dir.display(), "VSIX directory not found");
                (status, Json(json!({ "error": self.message() }))).into_response()
            }
            _ => {
                tracing::error!(error = %self, "Request failed with internal error");
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}
