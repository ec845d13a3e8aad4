//! HTTP client for the ClimateGPT query endpoint.

use serde_json::Value;
use tracing::debug;

use super::QueryBackend;
use super::types::{QueryError, QueryRequest};
use crate::config::ClientConfig;

pub struct HttpQueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpQueryClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, QueryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| QueryError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl QueryBackend for HttpQueryClient {
    async fn ask(&self, question: &str) -> Result<Value, QueryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest { question })
            .send()
            .await
            .map_err(|e| QueryError::Request(e.to_string()))?;

        // Status is not inspected: any JSON body is handed to reply extraction.
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| QueryError::Body(e.to_string()))?;
        debug!(status, body_len = text.len(), "query endpoint responded");

        let payload: Value =
            serde_json::from_str(&text).map_err(|e| QueryError::Parse { status, message: e.to_string() })?;
        // A bare `null` body has no fields to look up, unlike other scalars.
        if payload.is_null() {
            return Err(QueryError::Parse { status, message: "response body is null".to_string() });
        }
        Ok(payload)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
