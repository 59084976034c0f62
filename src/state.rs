use std::sync::Arc;

use crate::api::dto::HealthDescriptor;
use crate::config::Config;

/// Router state shared by all handlers.
///
/// Built once at startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    pub descriptor: Arc<HealthDescriptor>,
}

impl AppState {
    pub fn new(descriptor: HealthDescriptor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.descriptor())
    }
}
