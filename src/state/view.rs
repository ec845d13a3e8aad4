#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::query::QueryState;

pub const TITLE: &str = "ClimateGPT 2.0";
pub const BADGE: &str = "BETA";
pub const BYLINE: &str = "by StormChasers";
pub const HEADLINE: &str = "Enhance decision making with robust climate information for researchers, policymakers, and business leaders";
pub const PLACEHOLDER: &str = "Type a climate related question to start";
pub const DISCLAIMER: &str = "ClimateGPT can make mistakes. Always double-check important information in its answers.";
pub const SUBMIT_LABEL: &str = "▶";
pub const LOADING_LABEL: &str = "...";

/// Render state for the query page, derived from [`QueryState`] alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub query: String,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Contents of the response panel; `None` hides the panel.
    pub response: Option<String>,
}

impl From<&QueryState> for PageView {
    fn from(state: &QueryState) -> Self {
        let loading = state.request.is_loading();
        Self {
            query: state.query.clone(),
            placeholder: PLACEHOLDER,
            submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: !loading,
            response: state
                .request
                .response_text()
                .filter(|text| !text.is_empty())
                .map(str::to_owned),
        }
    }
}
