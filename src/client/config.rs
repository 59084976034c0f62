//! Status client configuration loaded from environment variables.
//!
//! ## Optional Variables
//!
//! - `API_BASE_URL` - Where the status service lives when it is not reachable
//!   through the page origin (default: unset)
//! - `FRONTEND_ORIGIN` - The page origin the client runs on
//!   (default: `http://localhost:5000`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use super::endpoint;
use super::error::SetupError;
use crate::config::normalize_origin;

pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Status client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL override. `None` sends requests to `origin`.
    pub base_url: Option<String>,
    pub origin: Url,
    pub log_level: String,
    pub log_format: String,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `FRONTEND_ORIGIN` is set but is not a valid origin.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("API_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let origin = match env::var("FRONTEND_ORIGIN") {
            Ok(raw) if !raw.trim().is_empty() => {
                parse_origin(raw.trim()).context("Failed to load FRONTEND_ORIGIN")?
            }
            _ => parse_origin(DEFAULT_ORIGIN)?,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            origin,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` does not resolve to an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.endpoint().context("API_BASE_URL is invalid")?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Resolves the status endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidBaseUrl`] for an unusable base URL.
    pub fn endpoint(&self) -> Result<Url, SetupError> {
        endpoint::resolve(self.base_url.as_deref(), &self.origin)
    }
}

/// Parses a page origin, tolerating a trailing slash.
///
/// # Errors
///
/// Returns [`SetupError::InvalidOrigin`] unless the input is a bare HTTP(S) origin.
pub fn parse_origin(input: &str) -> Result<Url, SetupError> {
    normalize_origin(input)
        .ok()
        .and_then(|origin| Url::parse(&origin).ok())
        .ok_or_else(|| SetupError::InvalidOrigin(input.to_string()))
}
