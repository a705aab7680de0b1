//! Page-level access gate over the routed tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. On every path change it resolves the
//! current route against the access table and, for member-only paths
//! without a valid session, overlays a single blocking "sign in
//! required" prompt. Children stay rendered underneath so the layout
//! never flashes blank during the check.
//!
//! DESIGN
//! ======
//! The per-evaluation decision is the pure `evaluate_route_access`; the
//! component only wires it to the location, the session signal, and a
//! `GuardPromptState`. The latch is re-armed on path changes, so each
//! unauthorized navigation prompts at most once, and a login that
//! happens while the prompt is up clears it on the next evaluation.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::modal::PromptModal;
use crate::guard::prompt::GuardPromptState;
use crate::routes::{self, Access, RouteKey};
use crate::state::session::{self, SessionState};
use crate::util::navigation;
use crate::util::test_bypass;

/// Decision for one route evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Prompt,
}

/// Pure access decision for a resolved route.
///
/// `access` is `None` for paths outside the route table, which stay
/// permissive. The harness bypass wins over everything.
pub fn evaluate_route_access(
    access: Option<Access>,
    authenticated: bool,
    bypass: bool,
) -> RouteDecision {
    if bypass {
        return RouteDecision::Allow;
    }
    match access {
        None | Some(Access::Public) => RouteDecision::Allow,
        Some(Access::MemberOnly) => {
            if authenticated {
                RouteDecision::Allow
            } else {
                RouteDecision::Prompt
            }
        }
    }
}

/// Wraps the routed tree and gates member-only paths behind a login
/// prompt. The prompt's sole action navigates to the sign-in page.
#[component]
pub fn RouteGuard(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let prompt = RwSignal::new(GuardPromptState::default());
    let location = use_location();
    let last_path = RwSignal::new(String::new());

    // Effects never run during SSR, so server-rendered HTML carries no
    // prompt; the first client-side evaluation installs it.
    Effect::new(move || {
        let path = location.pathname.get();
        // Track the session flag so a login while the prompt is up
        // re-evaluates without a reload.
        session.track();
        if last_path.get_untracked() != path {
            last_path.set(path.clone());
            prompt.update(|p| p.rearm());
        }
        let access = routes::match_path(&path).map(|entry| entry.access);
        let authenticated = session::check_status(session);
        match evaluate_route_access(access, authenticated, test_bypass::auth_bypass_active()) {
            RouteDecision::Allow => prompt.update(|p| p.dismiss()),
            RouteDecision::Prompt => prompt.update(|p| {
                p.request_show();
            }),
        }
    });

    let confirm = Callback::new(move |()| {
        prompt.update(|p| p.dismiss());
        navigation::goto(&routes::path_for(RouteKey::AuthLogin, &[]));
    });

    view! {
        {children()}
        <Show when=move || prompt.get().open>
            <PromptModal
                title="Sign in required"
                description="You need to sign in to view this page."
                confirm_label="OK"
                on_confirm=confirm
            />
        </Show>
    }
}
