//! Refresh flow of the status client.

use tokio_util::sync::CancellationToken;

use super::source::StatusSource;
use super::state::{ViewEvent, ViewState};

/// How a single refresh ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Loaded,
    Failed,
    /// The client was torn down before a response arrived. State is unchanged.
    Cancelled,
}

/// Drives the three-state view over a [`StatusSource`].
///
/// `refresh` takes `&mut self`, so one client has at most one request in
/// flight. Dropping a refresh future aborts its request without touching state.
///
/// # Examples
///
/// ```rust,ignore
/// let mut client = StatusClient::new(HttpStatusSource::from_config(&config)?);
/// let teardown = client.teardown_handle();
///
/// client.refresh_with(|state| println!("{}", render(state))).await;
/// teardown.cancel(); // later refreshes are no-ops
/// ```
pub struct StatusClient<S> {
    source: S,
    state: ViewState,
    teardown: CancellationToken,
}

impl<S: StatusSource> StatusClient<S> {
    /// Creates a client in the `Loading` state. No request is made yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewState::default(),
            teardown: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns a token that tears the client down when cancelled.
    ///
    /// Cancelling it aborts the in-flight refresh, if any.
    pub fn teardown_handle(&self) -> CancellationToken {
        self.teardown.clone()
    }

    /// Tears the client down. Later refreshes return [`RefreshOutcome::Cancelled`].
    pub fn teardown(&self) {
        self.teardown.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_cancelled()
    }

    /// Runs one refresh.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        self.refresh_with(|_| {}).await
    }

    /// Runs one refresh, calling `on_change` after every state transition.
    ///
    /// The state goes to `Loading` first, then to `Loaded` or `Error` once the
    /// source answers. Teardown during the request is not an error: the
    /// request is dropped and the state stays as it was.
    pub async fn refresh_with<F>(&mut self, mut on_change: F) -> RefreshOutcome
    where
        F: FnMut(&ViewState),
    {
        if self.is_torn_down() {
            return RefreshOutcome::Cancelled;
        }

        self.transition(ViewEvent::Started);
        on_change(&self.state);

        let token = self.teardown.child_token();
        let result = tokio::select! {
            biased;
            () = token.cancelled() => None,
            result = self.source.fetch() => Some(result),
        };

        let Some(result) = result else {
            tracing::debug!("Refresh cancelled");
            return RefreshOutcome::Cancelled;
        };

        let outcome = match &result {
            Ok(_) => RefreshOutcome::Loaded,
            Err(err) => {
                tracing::info!("Refresh failed: {}", err);
                RefreshOutcome::Failed
            }
        };

        self.transition(ViewEvent::from(result));
        on_change(&self.state);
        outcome
    }

    fn transition(&mut self, event: ViewEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
