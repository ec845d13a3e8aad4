//! Wire types, errors, and reply extraction for the query endpoint.

use serde::Serialize;
use serde_json::Value;

/// Shown when the response has no usable `choices[0].message.content`.
pub const FALLBACK_REPLY: &str = "No response from ClimateGPT.";

/// Shown for every transport or parse failure. The cause is logged only.
pub const FAILURE_MESSAGE: &str = "Failed to connect to ClimateGPT API.";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the query endpoint.
///
/// None of these reach the user verbatim; they collapse to [`FAILURE_MESSAGE`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("response body read failed: {0}")]
    Body(String),

    /// The response body was not valid JSON.
    #[error("response parse failed (status {status}): {message}")]
    Parse { status: u16, message: String },
}

impl QueryError {
    /// Stable code for structured log fields.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_REQUEST",
            Self::Body(_) => "E_BODY",
            Self::Parse { .. } => "E_PARSE",
        }
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Request body sent to the endpoint: `{"question": "..."}`.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
}

// =============================================================================
// REPLY EXTRACTION
// =============================================================================

/// Pull the reply text out of a chat-completion shaped payload.
///
/// Strings are used as-is; numbers and `true` are rendered as text. A
/// missing segment along `choices[0].message.content`, a falsy value
/// (`""`, `0`, `false`, `null`), an array, or an object yields
/// [`FALLBACK_REPLY`].
#[must_use]
pub fn extract_reply(payload: &Value) -> String {
    payload
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(content_text)
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

fn content_text(content: &Value) -> Option<String> {
    match content {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => number_text(n),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_text(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 {
        return None;
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        return Some((f as i64).to_string());
    }
    Some(f.to_string())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
