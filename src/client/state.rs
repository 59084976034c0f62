//! Presentation state of the status client.

use crate::api::dto::HealthDescriptor;

use super::error::FetchError;

/// What the client currently shows. Exactly one of three states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Loaded(HealthDescriptor),
}

/// Something that happened during a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Started,
    Succeeded(HealthDescriptor),
    Failed(FetchError),
    Cancelled,
}

impl From<Result<HealthDescriptor, FetchError>> for ViewEvent {
    fn from(result: Result<HealthDescriptor, FetchError>) -> Self {
        match result {
            Ok(descriptor) => ViewEvent::Succeeded(descriptor),
            Err(err) => ViewEvent::Failed(err),
        }
    }
}

impl ViewState {
    /// Returns the state that follows `event`.
    ///
    /// `Cancelled` leaves the state untouched.
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::Started => ViewState::Loading,
            ViewEvent::Succeeded(descriptor) => ViewState::Loaded(descriptor),
            ViewEvent::Failed(err) => ViewState::Error(err.to_string()),
            ViewEvent::Cancelled => self,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> Option<&HealthDescriptor> {
        match self {
            ViewState::Loaded(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// The refresh trigger is disabled while a request is in flight.
    pub fn can_refresh(&self) -> bool {
        !self.is_loading()
    }
}
