//! Where the status client gets its health descriptor from.

use async_trait::async_trait;
use reqwest::header::ORIGIN;
use url::Url;

use crate::api::dto::HealthDescriptor;

use super::config::ClientConfig;
use super::error::{FetchError, SetupError};

/// One attempt to fetch the current health descriptor.
///
/// # Implementations
///
/// - [`HttpStatusSource`] - `GET /api/status` over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Performs a single request. Never retries.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] on a non-success status code
    /// - [`FetchError::Transport`] when no response arrives
    /// - [`FetchError::Decode`] when the body is not a health descriptor
    async fn fetch(&self) -> Result<HealthDescriptor, FetchError>;
}

/// Fetches the descriptor from the status service over HTTP.
///
/// Every request carries the page origin in its `Origin` header, so the
/// service's cross-origin policy applies to it as it would to a browser.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    http: reqwest::Client,
    url: Url,
    origin: String,
}

impl HttpStatusSource {
    /// Creates a source for an explicit status URL.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(url: Url, origin: &Url) -> Result<Self, SetupError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            url,
            origin: origin.origin().ascii_serialization(),
        })
    }

    /// Creates a source targeting the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be resolved or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SetupError> {
        Self::new(config.endpoint()?, &config.origin)
    }

    /// The fully resolved status URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<HealthDescriptor, FetchError> {
        tracing::debug!(url = %self.url, "Fetching status");

        let response = self
            .http
            .get(self.url.clone())
            .header(ORIGIN, self.origin.as_str())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %self.url, "Status request failed: {}", e);
                FetchError::transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "Status request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
