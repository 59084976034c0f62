//! HTTP API layer for the status service.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads, shared with the status client
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Cross-origin policy and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
