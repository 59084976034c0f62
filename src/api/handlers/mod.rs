//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;

pub use fallback::{fallback_handler, method_not_allowed_handler};
pub use health::status_handler;
