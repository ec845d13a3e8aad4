//! Query controller: owns the request lifecycle of the query page.
//!
//! DESIGN
//! ======
//! State lives in a `watch` channel so front-ends can re-render on every
//! transition without polling. A submission sets `Loading` before its first
//! suspension point and writes a terminal state only after the backend call
//! resolves. In-flight requests are never aborted; overlapping submissions
//! resolve independently and [`StalePolicy`] decides whether a superseded
//! one may still write its result.

use tokio::sync::watch;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::api::{FAILURE_MESSAGE, HttpQueryClient, QueryBackend, QueryError, extract_reply};
use crate::config::{ClientConfig, StalePolicy};
use crate::state::query::{QueryState, RequestState};
use crate::state::view::PageView;

pub struct QueryController<B> {
    backend: B,
    stale_policy: StalePolicy,
    state: watch::Sender<QueryState>,
}

impl QueryController<HttpQueryClient> {
    /// Build a controller backed by the HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, QueryError> {
        Ok(Self::new(HttpQueryClient::new(config)?, config.stale_policy))
    }
}

impl<B: QueryBackend> QueryController<B> {
    #[must_use]
    pub fn new(backend: B, stale_policy: StalePolicy) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self { backend, stale_policy, state }
    }

    /// Replace the input text.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|s| s.query = text);
    }

    #[must_use]
    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn request_state(&self) -> RequestState {
        self.state.borrow().request.clone()
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::from(&*self.state.borrow())
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Submit whatever is currently in the input.
    pub async fn submit_current(&self) -> RequestState {
        let query = self.state.borrow().query.clone();
        self.submit(&query).await
    }

    /// Submit `query` and wait for it to resolve.
    ///
    /// A blank query is a no-op: nothing is sent and the current state is
    /// returned untouched. Otherwise returns the state as it stands right
    /// after this submission resolved.
    pub async fn submit(&self, query: &str) -> RequestState {
        if query.trim().is_empty() {
            debug!("blank query ignored");
            return self.request_state();
        }

        let generation = self.begin();
        let request_id = Uuid::new_v4();

        async move {
            info!(query_len = query.len(), "query submitted");
            let next = match self.resolve(query).await {
                Ok(reply) => RequestState::Succeeded(reply),
                Err(e) => {
                    error!(error_code = e.error_code(), error = %e, "query failed");
                    RequestState::Failed(FAILURE_MESSAGE.to_string())
                }
            };
            self.finish(generation, next)
        }
        .instrument(info_span!("query", generation, %request_id))
        .await
    }

    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|s| {
            s.generation += 1;
            s.request = RequestState::Loading;
            generation = s.generation;
        });
        generation
    }

    async fn resolve(&self, query: &str) -> Result<String, QueryError> {
        let payload = self.backend.ask(query).await?;
        Ok(extract_reply(&payload))
    }

    fn finish(&self, generation: u64, next: RequestState) -> RequestState {
        let policy = self.stale_policy;
        let applied = self.state.send_if_modified(|s| {
            if policy == StalePolicy::LatestOnly && s.generation != generation {
                return false;
            }
            s.request = next;
            true
        });
        if applied {
            info!(succeeded = matches!(self.request_state(), RequestState::Succeeded(_)), "query resolved");
        } else {
            debug!(latest = self.state.borrow().generation, "stale response dropped");
        }
        self.request_state()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
