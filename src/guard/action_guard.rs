//! Callback-level access gate for member-only actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their event handlers with `ActionGuard::guard` so a guest
//! can see a page but not act on it. A denied invocation swallows the
//! call and opens a confirm/cancel prompt instead: confirm goes to the
//! sign-in page, cancel leaves the visitor where they were.
//!
//! DESIGN
//! ======
//! The handle is `Copy` over two signals, so wrapped closures can be
//! built in `view!` without ownership ceremony. The prompt latch makes
//! rapid repeated invocations (double clicks) show exactly one prompt,
//! and a route change dismisses a pending prompt outright: it belongs
//! to the page whose action raised it.

#[cfg(test)]
#[path = "action_guard_test.rs"]
mod action_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::modal::PromptModal;
use crate::guard::prompt::GuardPromptState;
use crate::routes::{RouteKey, path_for};
use crate::state::session::{self, SessionState};
use crate::util::navigation;

/// Guard handle for member-only actions, provided via context.
#[derive(Clone, Copy)]
pub struct ActionGuard {
    session: RwSignal<SessionState>,
    prompt: RwSignal<GuardPromptState>,
}

impl ActionGuard {
    /// Build the handle and put it into context. Called once at the app
    /// root, after the session signal is provided.
    pub fn provide(session: RwSignal<SessionState>) {
        let guard = ActionGuard {
            session,
            prompt: RwSignal::new(GuardPromptState::default()),
        };
        provide_context(guard);
    }

    /// Obtain the handle provided at the app root.
    pub fn expect() -> Self {
        expect_context::<ActionGuard>()
    }

    /// Wrap `callback` so it only runs for an authenticated member.
    ///
    /// Allowed invocations return `Some` of the callback's result.
    /// Denied invocations open the login prompt (once, per the latch)
    /// and return `None` without running the callback.
    pub fn guard<A, R>(self, callback: impl Fn(A) -> R) -> impl Fn(A) -> Option<R> {
        move |arg| {
            if session::check_status(self.session) {
                Some(callback(arg))
            } else {
                self.prompt.update(|p| {
                    p.request_show();
                });
                None
            }
        }
    }

    /// Whether the login prompt is currently rendered.
    pub fn prompt_open(self) -> bool {
        self.prompt.get().open
    }

    /// Close the prompt and clear the latch so a later denial prompts
    /// again. Runs for cancel clicks and for route changes.
    pub fn dismiss(self) {
        self.prompt.update(|p| p.dismiss());
    }

    fn confirm(self) {
        self.prompt.update(|p| p.dismiss());
        navigation::goto(&path_for(RouteKey::AuthLogin, &[]));
    }
}

/// Renders the action guard's confirm/cancel prompt.
///
/// Mounted once at the app root so every guarded page shares it. Watches
/// the location so a pending prompt never survives navigation.
#[component]
pub fn LoginConfirmPrompt() -> impl IntoView {
    let guard = ActionGuard::expect();
    let location = use_location();
    let last_path = RwSignal::new(String::new());

    // A pending prompt belongs to the page whose action raised it;
    // navigating away (links, browser back) must not leave it covering
    // the next page.
    Effect::new(move || {
        let path = location.pathname.get();
        if last_path.get_untracked() != path {
            last_path.set(path);
            guard.dismiss();
        }
    });

    view! {
        <Show when=move || guard.prompt_open()>
            <PromptModal
                title="Sign in required"
                description="Sign in to use this feature. Go to the sign-in page?"
                confirm_label="Sign in"
                cancel_label="Cancel"
                on_confirm=Callback::new(move |()| guard.confirm())
                on_cancel=Callback::new(move |()| guard.dismiss())
            />
        </Show>
    }
}
