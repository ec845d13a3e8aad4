//! Query endpoint access.
//!
//! DESIGN
//! ======
//! `QueryBackend` is the seam between the controller and the network.
//! `HttpQueryClient` is the production implementation; tests substitute
//! in-process backends or point the HTTP client at a local mock server.

pub mod client;
pub mod types;

pub use client::HttpQueryClient;
pub use types::{FAILURE_MESSAGE, FALLBACK_REPLY, QueryError, extract_reply};

use serde_json::Value;

/// Provider-neutral async trait for the query endpoint. Enables mocking in tests.
#[async_trait::async_trait]
pub trait QueryBackend: Send + Sync {
    /// Send one question and return the parsed JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the body cannot be
    /// read, or the body is not JSON.
    async fn ask(&self, question: &str) -> Result<Value, QueryError>;
}

#[async_trait::async_trait]
impl<T: QueryBackend + ?Sized> QueryBackend for std::sync::Arc<T> {
    async fn ask(&self, question: &str) -> Result<Value, QueryError> {
        (**self).ask(question).await
    }
}
