//! Post list page with a guarded shortcut to the new-post form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::action_guard::ActionGuard;
use crate::routes::{RouteKey, path_for};
use crate::state::boards::BoardsState;

#[component]
pub fn BoardsPage() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let guard = ActionGuard::expect();
    let navigate = use_navigate();

    let navigate_detail = navigate.clone();
    let open_board = Callback::new(move |id: String| {
        navigate_detail(
            &path_for(RouteKey::BoardDetail, &[("BoardId", id.as_str())]),
            NavigateOptions::default(),
        );
    });

    // Writing a post is member-only even though the list itself is public.
    let navigate_new = navigate.clone();
    let on_new_post = guard.guard(move |()| {
        navigate_new(
            &path_for(RouteKey::BoardNew, &[]),
            NavigateOptions::default(),
        );
    });

    view! {
        <div class="boards-page">
            <header class="boards-page__header">
                <h1>"Boards"</h1>
                <button class="btn btn--primary boards-page__new" on:click=move |_| {
                    let _ = on_new_post(());
                }>
                    "+ New post"
                </button>
            </header>
            <Show
                when=move || !boards.get().items.is_empty()
                fallback=move || view! { <p class="boards-page__empty">"No posts yet."</p> }
            >
                <div class="board-list">
                    {move || {
                        boards
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <button
                                        class="board-list__row"
                                        on:click=move |_| open_board.run(id.clone())
                                    >
                                        <span class="board-list__title">{item.title}</span>
                                        <span class="board-list__author">{item.author}</span>
                                        <span class="board-list__date">{item.created_at}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
