//! Route table for the VSIX server

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::catalog::ExtensionCatalog;
use crate::http::{handlers, middleware as http_middleware};

/// Build the application router around a shared catalog
pub fn build_router(catalog: Arc<ExtensionCatalog>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/extensions", get(handlers::list_extensions_handler))
        .route(
            "/extensions/{name}",
            get(handlers::download_extension_handler),
        )
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}
