//! Sign-up page creating an account, then handing off to sign-in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::modal::PromptModal;
use crate::routes::{RouteKey, path_for};

/// Checks the sign-up form field by field, reporting the first problem.
///
/// Returns trimmed email plus the name and password as typed.
fn validate_signup_input(
    email: &str,
    name: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if !email.contains('@') {
        return Err("Email must contain @.");
    }
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if name.chars().count() > 100 {
        return Err("Name must be 100 characters or fewer.");
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err("Password must contain letters and numbers.");
    }
    if password_confirm.is_empty() {
        return Err("Enter your password again.");
    }
    if password != password_confirm {
        return Err("Passwords do not match.");
    }
    Ok((email.to_owned(), name.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, name_value, password_value) = match validate_signup_input(
            &email.get(),
            &name.get(),
            &password.get(),
            &password_confirm.get(),
        ) {
            Ok(values) => values,
            Err(reason) => {
                message.set(reason.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&email_value, &name_value, &password_value).await {
                Ok(_) => created.set(true),
                Err(e) => message.set(format!("Sign-up failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, name_value, password_value);
    };

    let navigate_login = navigate.clone();
    let on_created_confirm = Callback::new(move |()| {
        created.set(false);
        navigate_login(
            &path_for(RouteKey::AuthLogin, &[]),
            NavigateOptions::default(),
        );
    });

    let navigate_back = navigate.clone();
    let on_back = move |_| {
        navigate_back(
            &path_for(RouteKey::AuthLogin, &[]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up"</h1>
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
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password again"
                        prop:value=move || password_confirm.get()
                        on:input=move |ev| password_confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <button class="auth-link" on:click=on_back>
                    "Already have an account? Sign in"
                </button>
            </div>
            <Show when=move || created.get()>
                <PromptModal
                    title="Account created"
                    description="Welcome aboard. Sign in to get started."
                    confirm_label="OK"
                    on_confirm=on_created_confirm
                />
            </Show>
        </div>
    }
}
