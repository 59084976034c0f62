//! HTTP middleware for request processing.
//!
//! Provides the cross-origin policy and observability middleware.

pub mod cors;
pub mod tracing;
