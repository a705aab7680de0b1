//! Application chrome: navigation bar, banner strip, and content region.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page renders inside this shell. The navigation and banner
//! regions are shown or hidden per the matched route's visibility flags, so
//! auth pages get a bare canvas while board pages keep the full chrome. The
//! right side of the navigation bar flips between a sign-in button and the
//! signed-in user's name with a sign-out button.
//!
//! DESIGN
//! ======
//! Visibility is derived, not stored: each region wraps itself in a `Show`
//! that re-reads `use_location().pathname` against the route table. Unknown
//! paths keep both regions visible so a bad link never strips the chrome.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{self, RouteKey, path_for};
use crate::state::session::{self, SessionState};

/// Shell wrapping every routed page. Children render into the content region.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    let nav_visible = {
        let pathname = location.pathname;
        move || routes::navigation_visible(&pathname.get())
    };
    let banner_visible = {
        let pathname = location.pathname;
        move || routes::banner_visible(&pathname.get())
    };
    let boards_active = {
        let pathname = location.pathname;
        move || {
            let path = pathname.get();
            path == "/" || path.starts_with("/boards")
        }
    };

    let user_name = move || {
        session
            .get()
            .user
            .map(|user| {
                if user.name.is_empty() {
                    user.email
                } else {
                    user.name
                }
            })
            .unwrap_or_default()
    };

    // Callbacks so the handlers stay usable inside the re-runnable Show
    // bodies below.
    let navigate_home = navigate.clone();
    let on_logo = Callback::new(move |()| {
        navigate_home(
            &path_for(RouteKey::BoardsList, &[]),
            NavigateOptions::default(),
        );
    });

    let on_sign_in = Callback::new(move |()| {
        navigate(
            &path_for(RouteKey::AuthLogin, &[]),
            NavigateOptions::default(),
        );
    });

    let on_sign_out = move |_| {
        session::logout(session);
    };

    view! {
        <div class="layout">
            <Show when=nav_visible>
                <nav class="layout__nav nav">
                    <button class="nav__logo" on:click=move |_| on_logo.run(())>
                        "Agora"
                    </button>
                    <button
                        class="nav__tab"
                        class:nav__tab--active=boards_active
                        on:click=move |_| on_logo.run(())
                    >
                        "Boards"
                    </button>

                    <span class="nav__spacer"></span>

                    <Show
                        when=move || session.get().authenticated
                        fallback=move || {
                            view! {
                                <button class="btn nav__sign-in" on:click=move |_| on_sign_in.run(())>
                                    "Sign in"
                                </button>
                            }
                        }
                    >
                        <span class="nav__user">{user_name}</span>
                        <button class="btn nav__sign-out" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </Show>
                </nav>
            </Show>

            <Show when=banner_visible>
                <section class="layout__banner banner" aria-label="main banner">
                    <h1 class="banner__title">"Agora"</h1>
                    <p class="banner__tagline">"Community boards for everyone"</p>
                </section>
            </Show>

            <main class="layout__content">{children()}</main>
        </div>
    }
}
