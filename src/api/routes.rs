//! API route configuration.

use crate::api::handlers::{method_not_allowed_handler, status_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /status` - Service health descriptor
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/status",
        get(status_handler).fallback(method_not_allowed_handler),
    )
}
