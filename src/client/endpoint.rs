//! Resolution of the status endpoint URL.

use url::Url;

use super::error::SetupError;

/// Path of the status endpoint on the service.
pub const STATUS_PATH: &str = "/api/status";

/// Joins `base` and `path` with exactly one separating slash.
///
/// Any base path is kept, so a service mounted under a prefix still resolves.
///
/// # Examples
///
/// ```
/// use driver_checker::client::endpoint::join_url;
///
/// assert_eq!(join_url("http://x:5000", "/api/status"), "http://x:5000/api/status");
/// assert_eq!(join_url("http://x:5000/", "/api/status"), "http://x:5000/api/status");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves the absolute status URL.
///
/// With a base URL the request goes there; without one it goes to the page
/// origin, which is expected to forward `/api` to the service.
///
/// # Errors
///
/// Returns [`SetupError::InvalidBaseUrl`] if the result is not an absolute
/// HTTP(S) URL.
pub fn resolve(base_url: Option<&str>, origin: &Url) -> Result<Url, SetupError> {
    let base = base_url
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| origin.as_str());

    let joined = join_url(base, STATUS_PATH);
    let url = Url::parse(&joined).map_err(|e| SetupError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SetupError::InvalidBaseUrl {
            url: base.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
