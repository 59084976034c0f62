//! Tracing subscriber setup shared by the service and the status client.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FALLBACK_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive (e.g. `info`,
/// `driver_checker=debug,tower_http=info`); an unparsable directive falls back
/// to `info` and is reported as a warning once logging is up. `log_format`
/// selects `json` output, anything else is plain text.
/// Logs go to stderr so the status client's rendered output stays clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let (filter, rejected) = parse_filter(log_level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    result.context("Failed to install tracing subscriber")?;

    if let Some(reason) = rejected {
        tracing::warn!(
            directive = %log_level,
            %reason,
            "Invalid log filter, using '{}'",
            FALLBACK_LEVEL
        );
    }
    Ok(())
}

/// Parses a filter directive. On failure returns the fallback filter and the
/// parse error text.
fn parse_filter(log_level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e.to_string())),
    }
}
