//! Root application component with routing, contexts, and session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared signals (session, board list), installs the action
//! guard, and mounts the router. `SessionBootstrap` runs the client-only
//! wiring: it registers the router-backed navigator, revalidates the stored
//! session once at startup, and re-checks it whenever the window regains
//! focus so an expiry that passed while the tab was hidden signs the user
//! out on return.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::guard::action_guard::{ActionGuard, LoginConfirmPrompt};
use crate::guard::route_guard::RouteGuard;
use crate::pages::{
    board_detail::BoardDetailPage, board_edit::BoardEditPage, board_new::BoardNewPage,
    boards::BoardsPage, login::LoginPage, signup::SignupPage,
};
use crate::state::boards::BoardsState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let boards = RwSignal::new(BoardsState::default());

    provide_context(session);
    provide_context(boards);
    ActionGuard::provide(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/agora-client.css"/>
        <Title text="Agora"/>

        <Router>
            <SessionBootstrap/>
            <AppLayout>
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=BoardsPage/>
                        <Route
                            path=(StaticSegment("auth"), StaticSegment("login"))
                            view=LoginPage
                        />
                        <Route
                            path=(StaticSegment("auth"), StaticSegment("signup"))
                            view=SignupPage
                        />
                        <Route path=StaticSegment("boards") view=BoardsPage/>
                        <Route
                            path=(StaticSegment("boards"), StaticSegment("new"))
                            view=BoardNewPage
                        />
                        <Route
                            path=(StaticSegment("boards"), ParamSegment("BoardId"))
                            view=BoardDetailPage
                        />
                        <Route
                            path=(
                                StaticSegment("boards"),
                                ParamSegment("BoardId"),
                                StaticSegment("edit"),
                            )
                            view=BoardEditPage
                        />
                    </Routes>
                </RouteGuard>
            </AppLayout>
            <LoginConfirmPrompt/>
        </Router>
    }
}

/// Client-only session wiring. Renders nothing.
#[component]
fn SessionBootstrap() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let session = expect_context::<RwSignal<SessionState>>();

        let navigate = use_navigate();
        crate::util::navigation::register_navigator(move |path| {
            navigate(path, NavigateOptions::default());
        });

        let _ = crate::state::session::revalidate(session);

        // Listener lives for the whole app, so handing the closure to the
        // browser and forgetting it is fine.
        let on_focus = Closure::wrap(Box::new(move || {
            let _ = crate::state::session::revalidate(session);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
        }
        on_focus.forget();
    }
}
