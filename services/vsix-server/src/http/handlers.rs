//! HTTP request handlers for the VSIX server
//!
//! Implements the listing, download and health endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::core::catalog::ExtensionCatalog;
use crate::core::error::VsixError;
use crate::core::types::{ExtensionRecord, HealthResponse};

/// RFC 5987 `attr-char`: everything except alphanumerics and these
/// marks is percent-encoded in `filename*`
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List extensions handler
///
/// Returns every `.vsix` file in the directory as `{name, url}`,
/// sorted by name.
///
/// # Errors
///
/// - `DirectoryNotFound`: the configured directory is missing (500)
pub async fn list_extensions_handler(
    State(catalog): State<Arc<ExtensionCatalog>>,
) -> Result<Json<Vec<ExtensionRecord>>, VsixError> {
    let records = catalog.list().await?;
    Ok(Json(records))
}

/// Download extension handler
///
/// Sends the file's bytes as an `application/octet-stream` attachment
/// named after the requested name.
///
/// # Errors
///
/// - `ExtensionNotFound`: wrong suffix, missing file, a name that
///   resolves outside the directory, or a segment that does not
///   decode to UTF-8 (404)
pub async fn download_extension_handler(
    State(catalog): State<Arc<ExtensionCatalog>>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, VsixError> {
    let Path(name) = name.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable extension name");
        VsixError::ExtensionNotFound(rejection.body_text())
    })?;

    let bytes = catalog.read(&name).await?;

    tracing::debug!(name = %name, size = bytes.len(), "Serving extension");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_DISPOSITION, attachment_disposition(&name)),
            (header::CONTENT_LENGTH, HeaderValue::from(bytes.len())),
        ],
        bytes,
    )
        .into_response())
}

/// Build `attachment; filename="<name>"`
///
/// Quotes and backslashes are escaped. Non-ASCII names get an ASCII
/// `filename` fallback (non-ASCII characters dropped) plus a
/// `filename*=UTF-8''` parameter carrying the percent-encoded name.
/// Names that still cannot form a header value (control characters)
/// fall back to a bare `attachment`.
pub fn attachment_disposition(name: &str) -> HeaderValue {
    let value = if name.is_ascii() {
        format!("attachment; filename=\"{}\"", quote_filename(name))
    } else {
        let fallback: String = name.chars().filter(char::is_ascii).collect();
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            quote_filename(&fallback),
            utf8_percent_encode(name, ATTR_CHAR)
        )
    };

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn quote_filename(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
