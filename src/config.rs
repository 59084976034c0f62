//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `HOST` - Bind address (default: `0.0.0.0`)
//! - `PORT` - Listen port (default: `5000`)
//! - `FRONTEND_ORIGIN` - The only origin allowed to read responses cross-origin
//!   (default: unset, any origin allowed)
//! - `STATUS_SERVICE_NAME` - Reported service name (default: `driver-checker-backend`)
//! - `STATUS_VALUE` - Reported status (default: `ok`)
//! - `STATUS_MESSAGE` - Reported message (default: `All systems operational`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::api::dto::health::HealthDescriptor;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SERVICE_NAME: &str = "driver-checker-backend";
pub const DEFAULT_STATUS: &str = "ok";
pub const DEFAULT_MESSAGE: &str = "All systems operational";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Single origin allowed to read responses. `None` allows any origin.
    pub allowed_origin: Option<String>,
    pub service_name: String,
    pub status: String,
    pub message: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origin = env::var("FRONTEND_ORIGIN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let service_name =
            env::var("STATUS_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
        let status = env::var("STATUS_VALUE").unwrap_or_else(|_| DEFAULT_STATUS.to_string());
        let message = env::var("STATUS_MESSAGE").unwrap_or_else(|_| DEFAULT_MESSAGE.to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            allowed_origin,
            service_name,
            status,
            message,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration and normalizes the allowed origin.
    ///
    /// A single trailing slash on `FRONTEND_ORIGIN` is stripped, since browsers
    /// never send one in the `Origin` header.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `allowed_origin` is not a bare `http`/`https` origin
    /// - `service_name` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&mut self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.host.trim().is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        if let Some(origin) = self.allowed_origin.take() {
            self.allowed_origin = Some(normalize_origin(&origin)?);
        }

        if self.service_name.trim().is_empty() {
            anyhow::bail!("STATUS_SERVICE_NAME must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the descriptor served by the status endpoint.
    pub fn descriptor(&self) -> HealthDescriptor {
        HealthDescriptor::new(&self.service_name, &self.status, &self.message)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.addr());
        match &self.allowed_origin {
            Some(origin) => tracing::info!("  Allowed origin: {}", origin),
            None => tracing::info!("  Allowed origin: any"),
        }
        tracing::info!("  Service name: {}", self.service_name);
        tracing::info!("  Reported status: {}", self.status);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: None,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            status: DEFAULT_STATUS.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Reduces an origin such as `https://app.example.com/` to the form browsers
/// send in the `Origin` header (`https://app.example.com`).
///
/// # Errors
///
/// Rejects non-HTTP(S) schemes, missing hosts, and anything carrying a path,
/// query, or fragment.
pub fn normalize_origin(input: &str) -> Result<String> {
    let url = Url::parse(input).with_context(|| format!("Invalid origin '{input}'"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("Origin '{input}' must use http or https, got '{other}'"),
    }

    if url.host_str().is_none() {
        anyhow::bail!("Origin '{input}' has no host");
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        anyhow::bail!("Origin '{input}' must not contain a path, query or fragment");
    }

    Ok(url.origin().ascii_serialization())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
