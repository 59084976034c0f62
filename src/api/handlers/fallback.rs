//! Handlers for requests that match no route or method.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Returns `404 Not Found` in the standard error envelope.
pub async fn fallback_handler(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "No route matched");

    AppError::not_found(
        "Route not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}

/// Returns `405 Method Not Allowed` for a known path hit with the wrong method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "method": method.as_str(), "path": uri.path(), "allowed": ["GET", "HEAD"] }),
    )
}
