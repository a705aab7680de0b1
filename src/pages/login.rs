//! Sign-in page exchanging email + password for an access token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{RouteKey, path_for};
#[cfg(feature = "hydrate")]
use crate::state::session;
use crate::state::session::SessionState;

/// Checks the sign-in form before any request goes out.
///
/// Returns the trimmed email and the password as typed; passwords are
/// never trimmed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if !email.contains('@') {
        return Err("Email must contain @.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(reason) => {
                    message.set(reason.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = match crate::net::api::login_user(&email_value, &password_value).await {
                Ok(token) => token,
                Err(e) => {
                    message.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                    return;
                }
            };
            match crate::net::api::fetch_logged_in_user(&token).await {
                Ok(user) => {
                    session::login(session, user, &token, session::DEFAULT_TTL_SECONDS);
                }
                Err(e) => {
                    message.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, email_value, password_value);
    };

    let navigate_signup = navigate.clone();
    let on_signup = move |_| {
        navigate_signup(
            &path_for(RouteKey::AuthSignup, &[]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <button class="auth-link" on:click=on_signup>
                    "No account yet? Sign up"
                </button>
            </div>
        </div>
    }
}
