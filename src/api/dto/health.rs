//! DTO for the status endpoint.

use serde::{Deserialize, Serialize};

/// Service health as reported by `GET /api/status`.
///
/// Shared by the service (encoding) and the status client (decoding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDescriptor {
    pub service: String,
    pub status: String,
    pub message: String,
}

impl HealthDescriptor {
    pub fn new(
        service: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            status: status.into(),
            message: message.into(),
        }
    }

    /// Case-insensitive comparison of `status` against `"ok"`.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
