//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/status` - Service health descriptor
//! - anything else     - `404` error envelope
//!
//! # Middleware
//!
//! - **CORS** - Single allowed origin, or any origin when unconfigured
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::fallback_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origin` - the only origin allowed to read responses cross-origin;
///   `None` allows any origin
///
/// # Errors
///
/// Returns an error if `allowed_origin` cannot be used as a header value.
pub fn app_router(state: AppState, allowed_origin: Option<&str>) -> Result<NormalizePath<Router>> {
    let router = Router::new()
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer(allowed_origin)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
