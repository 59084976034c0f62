//! Status client: fetches the health descriptor and renders it.
//!
//! # Modules
//!
//! - [`config`] - Base URL and page origin from the environment
//! - [`endpoint`] - Status URL resolution
//! - [`source`] - [`StatusSource`] trait and its HTTP implementation
//! - [`state`] - Three-state view model (loading, error, loaded)
//! - [`controller`] - Refresh flow with teardown cancellation
//! - [`render`] - Terminal output
//! - [`error`] - Fetch and setup errors

pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod render;
pub mod source;
pub mod state;

pub use config::ClientConfig;
pub use controller::{RefreshOutcome, StatusClient};
pub use error::{FetchError, SetupError};
pub use source::{HttpStatusSource, StatusSource};
pub use state::{ViewEvent, ViewState};
