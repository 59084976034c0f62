//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod health;

pub use health::HealthDescriptor;
