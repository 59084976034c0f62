//! Handler for the status endpoint.

use axum::{Json, extract::State};

use crate::api::dto::HealthDescriptor;
use crate::state::AppState;

/// Reports the health of the backend service.
///
/// # Endpoint
///
/// `GET /api/status`
///
/// # Response Codes
///
/// - **200 OK**: Always, once the process is serving requests
///
/// # Response
///
/// ```json
/// {
///   "service": "driver-checker-backend",
///   "status": "ok",
///   "message": "All systems operational"
/// }
/// ```
///
/// The descriptor is fixed at startup, so repeated calls return identical bodies.
pub async fn status_handler(State(state): State<AppState>) -> Json<HealthDescriptor> {
    Json(HealthDescriptor::clone(&state.descriptor))
}
