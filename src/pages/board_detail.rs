//! Post detail page with guarded like/dislike reactions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::guard::action_guard::ActionGuard;
use crate::routes::{RouteKey, path_for};
use crate::state::boards::{BoardListItem, BoardsState};

#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let guard = ActionGuard::expect();
    let params = use_params_map();
    let navigate = use_navigate();

    let board_id = move || params.read().get("BoardId").unwrap_or_default();
    let item = move || -> Option<BoardListItem> {
        let id = board_id();
        boards.get().items.into_iter().find(|item| item.id == id)
    };

    let likes = RwSignal::new(0_i64);
    let dislikes = RwSignal::new(0_i64);

    // Reactions are member-only even though reading is public.
    let on_like = guard.guard(move |()| likes.update(|n| *n += 1));
    let on_dislike = guard.guard(move |()| dislikes.update(|n| *n += 1));

    let navigate_edit = navigate.clone();
    let on_edit = move |_| {
        navigate_edit(
            &path_for(RouteKey::BoardEdit, &[("BoardId", board_id().as_str())]),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="board-detail">
            <Show
                when=move || item().is_some()
                fallback=move || view! { <p class="board-detail__missing">"Post not found."</p> }
            >
                <article class="board-detail__post">
                    <h1 class="board-detail__title">
                        {move || item().map(|i| i.title).unwrap_or_default()}
                    </h1>
                    <p class="board-detail__meta">
                        <span class="board-detail__author">
                            {move || item().map(|i| i.author).unwrap_or_default()}
                        </span>
                        <span class="board-detail__date">
                            {move || item().map(|i| i.created_at).unwrap_or_default()}
                        </span>
                    </p>
                    <div class="board-detail__body">
                        {move || item().map(|i| i.contents).unwrap_or_default()}
                    </div>
                </article>
            </Show>

            <div class="board-detail__reactions">
                <button class="btn board-detail__like" on:click=move |_| {
                    let _ = on_like(());
                }>
                    "Like " {move || likes.get()}
                </button>
                <button class="btn board-detail__dislike" on:click=move |_| {
                    let _ = on_dislike(());
                }>
                    "Dislike " {move || dislikes.get()}
                </button>
                <button class="btn board-detail__edit" on:click=on_edit>
                    "Edit"
                </button>
            </div>
        </div>
    }
}
