use super::*;

// =============================================================
// GuardPromptState transitions
// =============================================================

#[test]
fn default_state_is_closed_and_unlatched() {
    let state = GuardPromptState::default();
    assert!(!state.shown);
    assert!(!state.open);
}

#[test]
fn first_show_request_opens_and_latches() {
    let mut state = GuardPromptState::default();
    assert!(state.request_show());
    assert!(state.shown);
    assert!(state.open);
}

#[test]
fn repeated_show_request_is_a_no_op() {
    let mut state = GuardPromptState::default();
    assert!(state.request_show());
    assert!(!state.request_show());
    assert!(!state.request_show());
    assert!(state.open);
}

#[test]
fn rearm_clears_the_latch_but_keeps_the_prompt_open() {
    let mut state = GuardPromptState::default();
    state.request_show();
    state.rearm();
    assert!(!state.shown);
    assert!(state.open);
}

#[test]
fn rearm_allows_the_prompt_to_show_again() {
    let mut state = GuardPromptState::default();
    state.request_show();
    state.dismiss();
    state.rearm();
    assert!(state.request_show());
    assert!(state.open);
}

#[test]
fn dismiss_clears_both_flags() {
    let mut state = GuardPromptState::default();
    state.request_show();
    state.dismiss();
    assert!(!state.shown);
    assert!(!state.open);
}

#[test]
fn show_after_dismiss_without_rearm_opens_again() {
    // Dismiss clears the latch too, so the next denial prompts afresh.
    let mut state = GuardPromptState::default();
    state.request_show();
    state.dismiss();
    assert!(state.request_show());
}
