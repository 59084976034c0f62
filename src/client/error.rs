//! Error types for the status client.

use std::error::Error as _;

/// Message shown when a transport failure carries no description of its own.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Unable to reach the status service";

/// Why a single refresh attempt failed.
///
/// Cancellation has no variant here: a cancelled refresh is not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The service answered with a non-success status code.
    #[error("Request failed with status {0}")]
    Status(u16),

    /// No response was received.
    #[error("{}", .0.as_deref().unwrap_or(TRANSPORT_FALLBACK_MESSAGE))]
    Transport(Option<String>),

    /// The response body was not a health descriptor.
    #[error("Invalid status payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// Builds a transport error from a reqwest failure, keeping the innermost
    /// cause (e.g. `Connection refused`) as the description.
    pub fn transport(err: &reqwest::Error) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            description = cause.to_string();
            source = cause.source();
        }

        let description = description.trim();
        if description.is_empty() {
            Self::Transport(None)
        } else {
            Self::Transport(Some(description.to_string()))
        }
    }
}

/// Errors raised while setting up a status client.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid page origin '{0}'")]
    InvalidOrigin(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
