use super::*;
use crate::util::test_bypass;

use std::cell::Cell;
use std::rc::Rc;

fn test_guard() -> ActionGuard {
    test_bypass::set_test_environment(false);
    test_bypass::set_auth_bypass(false);
    ActionGuard {
        session: RwSignal::new(SessionState::default()),
        prompt: RwSignal::new(GuardPromptState::default()),
    }
}

// =============================================================
// Denied invocations
// =============================================================

#[test]
fn denied_invocation_never_runs_the_callback() {
    let guard = test_guard();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = guard.guard(move |()| counter.set(counter.get() + 1));

    assert_eq!(wrapped(()), None);
    assert_eq!(calls.get(), 0);
    assert!(guard.prompt_open());
}

#[test]
fn rapid_repeat_invocations_show_one_prompt() {
    let guard = test_guard();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = guard.guard(move |()| counter.set(counter.get() + 1));

    assert_eq!(wrapped(()), None);
    assert_eq!(wrapped(()), None);
    assert_eq!(wrapped(()), None);
    assert_eq!(calls.get(), 0);
    // The latch held: still exactly one prompt instance.
    assert!(guard.prompt_open());
    assert!(guard.prompt.get_untracked().shown);
}

#[test]
fn confirm_clears_the_prompt_and_still_never_ran_the_callback() {
    let guard = test_guard();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = guard.guard(move |()| counter.set(counter.get() + 1));

    assert_eq!(wrapped(()), None);
    guard.confirm();
    assert!(!guard.prompt_open());
    assert!(!guard.prompt.get_untracked().shown);
    assert_eq!(calls.get(), 0);
}

#[test]
fn cancel_clears_both_flags_and_allows_a_later_prompt() {
    let guard = test_guard();
    let wrapped = guard.guard(|()| ());

    assert_eq!(wrapped(()), None);
    guard.dismiss();
    assert!(!guard.prompt_open());

    // A fresh denial prompts again.
    assert_eq!(wrapped(()), None);
    assert!(guard.prompt_open());
}

#[test]
fn route_change_closes_a_pending_prompt() {
    let guard = test_guard();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = guard.guard(move |()| counter.set(counter.get() + 1));

    // Denied on one page: prompt up, callback suppressed.
    assert_eq!(wrapped(()), None);
    assert!(guard.prompt_open());

    // Navigating away runs the same reset the prompt's location watcher
    // issues: the stale modal must not cover the next page.
    guard.dismiss();
    assert!(!guard.prompt_open());
    assert!(!guard.prompt.get_untracked().shown);
    assert_eq!(calls.get(), 0);

    // A denial on the next page prompts afresh, still without running
    // the callback.
    assert_eq!(wrapped(()), None);
    assert!(guard.prompt_open());
    assert_eq!(calls.get(), 0);
}

// =============================================================
// Allowed invocations
// =============================================================

#[test]
fn bypassed_invocation_runs_the_callback_and_returns_its_value() {
    let guard = test_guard();
    test_bypass::set_test_environment(true);
    test_bypass::set_auth_bypass(true);

    let wrapped = guard.guard(|n: i64| n * 2);
    assert_eq!(wrapped(21), Some(42));
    assert!(!guard.prompt_open());
}

#[test]
fn bypass_requires_both_flags_for_the_guard_too() {
    let guard = test_guard();
    test_bypass::set_auth_bypass(true);

    let wrapped = guard.guard(|()| ());
    assert_eq!(wrapped(()), None);
    assert!(guard.prompt_open());
}
