use super::*;
use crate::state::query::RequestState;

fn state(query: &str, request: RequestState) -> QueryState {
    QueryState { query: query.to_owned(), request, generation: 1 }
}

#[test]
fn idle_view_hides_response_and_enables_submit() {
    let view = PageView::from(&QueryState::default());
    assert_eq!(view.query, "");
    assert_eq!(view.placeholder, PLACEHOLDER);
    assert_eq!(view.submit_label, SUBMIT_LABEL);
    assert!(view.submit_enabled);
    assert!(view.response.is_none());
}

#[test]
fn loading_view_disables_submit_and_shows_placeholder_label() {
    let view = PageView::from(&state("sea level", RequestState::Loading));
    assert_eq!(view.query, "sea level");
    assert_eq!(view.submit_label, LOADING_LABEL);
    assert!(!view.submit_enabled);
    assert!(view.response.is_none());
}

#[test]
fn succeeded_view_shows_reply() {
    let view = PageView::from(&state("sea level", RequestState::Succeeded("Rising.".into())));
    assert!(view.submit_enabled);
    assert_eq!(view.response.as_deref(), Some("Rising."));
}

#[test]
fn failed_view_shows_message() {
    let view = PageView::from(&state("q", RequestState::Failed("Failed to connect to ClimateGPT API.".into())));
    assert_eq!(view.submit_label, SUBMIT_LABEL);
    assert_eq!(view.response.as_deref(), Some("Failed to connect to ClimateGPT API."));
}

#[test]
fn empty_reply_hides_panel() {
    let view = PageView::from(&state("q", RequestState::Succeeded(String::new())));
    assert!(view.response.is_none());
}
