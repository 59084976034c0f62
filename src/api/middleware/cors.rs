//! Cross-origin policy for all responses.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS middleware.
///
/// # Policy
///
/// - `allowed_origin = None`: any origin may read responses
///   (`Access-Control-Allow-Origin: *`)
/// - `allowed_origin = Some(x)`: only requests with `Origin: x` receive
///   `Access-Control-Allow-Origin: x`; other origins get no CORS headers
///
/// Preflight (`OPTIONS`) requests are answered by the layer itself.
///
/// # Errors
///
/// Returns an error if the origin is not a valid header value.
pub fn layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let allow_origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin)
                .with_context(|| format!("Allowed origin '{origin}' is not a valid header value"))?,
        ),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any))
}
