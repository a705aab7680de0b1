//! Session lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single authority for "is the visitor signed in". Pages and guards read
//! the `RwSignal<SessionState>` provided at the app root; every
//! transition funnels through `login`/`logout`/`revalidate` here so the
//! persisted keys, the signal, and the scheduled logout never drift
//! apart. Other modules must treat the three `localStorage` keys as
//! opaque and go through this API.
//!
//! DESIGN
//! ======
//! Decision logic is pure: `classify_stored_session` turns the persisted
//! keys plus a clock reading into a verdict, and the hydrate-gated shell
//! applies that verdict to storage, the signal, and the timer slot. At
//! most one logout timer is ever live; the single arming function cancels
//! the previous handle first, so a re-login cannot leave a stale deadline
//! ticking. Deadlines beyond the browser-timer range are caught by the
//! focus-driven revalidation instead.
//!
//! ERROR HANDLING
//! ==============
//! Corrupt persisted state is indistinguishable from "signed out": every
//! malformed record funnels into `logout`, never into an error surfaced
//! to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
#[cfg(feature = "hydrate")]
use crate::routes::{RouteKey, path_for};
#[cfg(feature = "hydrate")]
use crate::util::navigation;
#[cfg(feature = "hydrate")]
use crate::util::storage;
use crate::util::test_bypass;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

/// localStorage key holding the API access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// localStorage key holding the serialized member record.
pub const USER_KEY: &str = "user";
/// localStorage key holding the expiry instant as stringified epoch ms.
pub const TOKEN_EXPIRES_AT_KEY: &str = "tokenExpiresAt";

/// Token lifetime granted by a fresh login.
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

/// Reactive session state provided via context at the app root.
///
/// `authenticated == true` implies `user` and `expires_at_ms` are set and
/// the credential existed in `localStorage` when last validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub expires_at_ms: Option<i64>,
}

/// Verdict over the persisted session keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    /// No credential present; nothing to restore.
    Missing,
    /// Credential present but the expiry or user record is unusable.
    Corrupt,
    /// Credential present but past its deadline.
    Expired,
    /// Restorable session.
    Active { user: User, expires_at_ms: i64 },
}

/// Classify the persisted keys against `now_ms`.
///
/// The expiry check runs before the user parse, so a record that is both
/// expired and malformed reports `Expired`; either way the caller ends in
/// `logout`. An empty credential counts as absent.
pub fn classify_stored_session(
    credential: Option<&str>,
    user_json: Option<&str>,
    expiry_raw: Option<&str>,
    now_ms: i64,
) -> StoredSession {
    match credential {
        None => return StoredSession::Missing,
        Some(token) if token.is_empty() => return StoredSession::Missing,
        Some(_) => {}
    }
    let Some(expires_at_ms) = expiry_raw.and_then(|raw| raw.trim().parse::<i64>().ok()) else {
        return StoredSession::Corrupt;
    };
    if now_ms >= expires_at_ms {
        return StoredSession::Expired;
    }
    let Some(user) = user_json.and_then(|raw| serde_json::from_str::<User>(raw).ok()) else {
        return StoredSession::Corrupt;
    };
    StoredSession::Active { user, expires_at_ms }
}

/// Expiry instant for a login issued at `now_ms` with `ttl_seconds`.
///
/// Non-positive lifetimes clamp to zero, which makes the scheduled
/// logout fire immediately.
pub fn expiry_for_ttl(now_ms: i64, ttl_seconds: i64) -> i64 {
    now_ms.saturating_add(ttl_seconds.max(0).saturating_mul(1000))
}

/// Browser-timer delay until `expires_at_ms`, clamped to `u32` range.
pub fn logout_delay_ms(now_ms: i64, expires_at_ms: i64) -> u32 {
    let remaining = expires_at_ms.saturating_sub(now_ms).max(0);
    u32::try_from(remaining).unwrap_or(u32::MAX)
}

#[cfg(feature = "hydrate")]
thread_local! {
    // Single slot: at most one scheduled logout per session.
    static SCHEDULED_LOGOUT: RefCell<Option<gloo_timers::callback::Timeout>> =
        const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn cancel_scheduled_logout() {
    SCHEDULED_LOGOUT.with(|slot| {
        if let Some(timer) = slot.borrow_mut().take() {
            timer.cancel();
        }
    });
}

#[cfg(feature = "hydrate")]
fn arm_scheduled_logout(session: RwSignal<SessionState>, expires_at_ms: i64) {
    // Cancel-before-reschedule keeps a stale deadline from firing after
    // a fresh login extended the session.
    cancel_scheduled_logout();
    let delay = logout_delay_ms(now_ms(), expires_at_ms);
    let timer = gloo_timers::callback::Timeout::new(delay, move || {
        leptos::logging::log!("session deadline reached; signing out");
        logout(session);
    });
    SCHEDULED_LOGOUT.with(|slot| *slot.borrow_mut() = Some(timer));
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Establish a session.
///
/// Persists the three keys, flips the signal, arms the logout timer for
/// the computed deadline, and moves to the post-login destination (the
/// board list).
pub fn login(session: RwSignal<SessionState>, user: User, access_token: &str, ttl_seconds: i64) {
    #[cfg(feature = "hydrate")]
    {
        let expires_at_ms = expiry_for_ttl(now_ms(), ttl_seconds);
        storage::write_string(ACCESS_TOKEN_KEY, access_token);
        storage::save_json(USER_KEY, &user);
        storage::write_string(TOKEN_EXPIRES_AT_KEY, &expires_at_ms.to_string());

        leptos::logging::log!("signed in as {}", user.name);
        session.set(SessionState {
            authenticated: true,
            user: Some(user),
            expires_at_ms: Some(expires_at_ms),
        });
        arm_scheduled_logout(session, expires_at_ms);
        navigation::goto(&path_for(RouteKey::BoardsList, &[]));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, user, access_token, ttl_seconds);
    }
}

/// Tear down the session.
///
/// Cancels the pending timer, clears the three keys, resets the signal,
/// and moves to the login route. Safe to call while already signed out.
pub fn logout(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        cancel_scheduled_logout();
        storage::remove(ACCESS_TOKEN_KEY);
        storage::remove(USER_KEY);
        storage::remove(TOKEN_EXPIRES_AT_KEY);
        if session.get_untracked().authenticated {
            leptos::logging::log!("signed out");
        }
        session.set(SessionState::default());
        navigation::goto(&path_for(RouteKey::AuthLogin, &[]));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Re-derive the session from persisted state.
///
/// Runs at app start and whenever the window regains focus. A missing
/// credential resets the signal quietly; a corrupt or expired record
/// forces a full `logout` including the redirect. Returns whether the
/// visitor is authenticated afterwards.
pub fn revalidate(session: RwSignal<SessionState>) -> bool {
    if test_bypass::auth_bypass_active() {
        return true;
    }
    #[cfg(feature = "hydrate")]
    {
        let verdict = classify_stored_session(
            storage::read_string(ACCESS_TOKEN_KEY).as_deref(),
            storage::read_string(USER_KEY).as_deref(),
            storage::read_string(TOKEN_EXPIRES_AT_KEY).as_deref(),
            now_ms(),
        );
        match verdict {
            StoredSession::Missing => {
                cancel_scheduled_logout();
                storage::remove(TOKEN_EXPIRES_AT_KEY);
                if session.get_untracked() != SessionState::default() {
                    session.set(SessionState::default());
                }
                false
            }
            StoredSession::Corrupt => {
                leptos::logging::warn!("stored session unreadable; signing out");
                logout(session);
                false
            }
            StoredSession::Expired => {
                leptos::logging::warn!("stored session expired; signing out");
                logout(session);
                false
            }
            StoredSession::Active { user, expires_at_ms } => {
                let next = SessionState {
                    authenticated: true,
                    user: Some(user),
                    expires_at_ms: Some(expires_at_ms),
                };
                if session.get_untracked() != next {
                    session.set(next);
                }
                arm_scheduled_logout(session, expires_at_ms);
                true
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        false
    }
}

/// Authorization check shared by the route guard and the action guard.
///
/// The harness bypass wins first (inside `revalidate`); otherwise the
/// answer comes from a fresh pass over persisted state.
pub fn check_status(session: RwSignal<SessionState>) -> bool {
    revalidate(session)
}
