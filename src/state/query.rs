#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Lifecycle of the most recent submission. Exactly one holds at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl RequestState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text for the response panel, if a submission has resolved.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) | Self::Failed(text) => Some(text),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// State owned by the query controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Input text. Never cleared by a submission.
    pub query: String,
    pub request: RequestState,
    /// Count of accepted submissions; the latest one owns this number.
    pub generation: u64,
}
