//! # Driver Checker
//!
//! Status service and status client for the Driver Checker backend.
//!
//! ## Components
//!
//! - **Status Service** ([`server`], [`routes`], [`api`]) - Axum server exposing
//!   `GET /api/status`, which returns a fixed health descriptor, with an
//!   optional single allowed origin for cross-origin reads
//! - **Status Client** ([`client`]) - Fetches the descriptor and renders one
//!   of three states (loading, error, loaded), with cancellation on teardown
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! PORT=5000 cargo run
//!
//! # In another terminal
//! cargo run --bin status-client -- --base-url http://localhost:5000
//! ```
//!
//! ## Configuration
//!
//! The service reads [`config::Config`], the client reads
//! [`client::ClientConfig`]; both come from environment variables (a `.env`
//! file is loaded when present).

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::HealthDescriptor;
    pub use crate::client::{ClientConfig, HttpStatusSource, RefreshOutcome, StatusClient, ViewState};
    pub use crate::config::Config;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
