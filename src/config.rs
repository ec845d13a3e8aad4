//! Client configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! The endpoint is loaded once at startup and handed to the HTTP client at
//! construction, so tests can point the same code at a local mock server.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://climate-backend.onrender.com/query";

/// Errors produced while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// What to do with a response whose submission has been superseded by a
/// newer one before it resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Every response is applied; the last one to resolve is what stays visible.
    #[default]
    LastResolvedWins,
    /// Only the most recent submission may write a terminal state.
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// `None` disables the request timeout entirely.
    pub request_timeout: Option<Duration>,
    pub stale_policy: StalePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), request_timeout: None, stale_policy: StalePolicy::default() }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit endpoint with every other value defaulted.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `CLIMATEGPT_API_URL`: default [`DEFAULT_ENDPOINT`]
    /// - `CLIMATEGPT_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `CLIMATEGPT_STALE_POLICY`: `last_resolved` (default) or `latest_only`
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout or stale policy cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var("CLIMATEGPT_API_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let request_timeout = parse_timeout(std::env::var("CLIMATEGPT_REQUEST_TIMEOUT_SECS").ok().as_deref())?;
        let stale_policy = parse_stale_policy(std::env::var("CLIMATEGPT_STALE_POLICY").ok().as_deref())?;

        Ok(Self { endpoint, request_timeout, stale_policy })
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| ConfigError::Parse(format!("invalid CLIMATEGPT_REQUEST_TIMEOUT_SECS: {value}"))),
    }
}

pub(crate) fn parse_stale_policy(raw: Option<&str>) -> Result<StalePolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("last_resolved") {
        "last_resolved" | "" => Ok(StalePolicy::LastResolvedWins),
        "latest_only" => Ok(StalePolicy::LatestOnly),
        other => Err(ConfigError::Parse(format!(
            "unsupported stale policy '{other}' (expected 'last_resolved' or 'latest_only')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
