//! New-post form with a guarded submit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::action_guard::ActionGuard;
use crate::pages::board_form::validate_board_input;
use crate::routes::{RouteKey, path_for};
use crate::state::boards::{BoardListItem, BoardsState};

#[cfg(feature = "hydrate")]
fn timestamp_now() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(feature = "hydrate"))]
fn timestamp_now() -> String {
    String::new()
}

#[component]
pub fn BoardNewPage() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let guard = ActionGuard::expect();
    let navigate = use_navigate();

    let author = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let contents = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let navigate_detail = navigate.clone();
    let submit_post = guard.guard(move |()| {
        let input = match validate_board_input(&author.get(), &title.get(), &contents.get()) {
            Ok(input) => input,
            Err(reason) => {
                message.set(reason.to_owned());
                return;
            }
        };
        let item = BoardListItem {
            id: uuid::Uuid::new_v4().to_string(),
            author: input.author,
            title: input.title,
            contents: input.contents,
            created_at: timestamp_now(),
        };
        let id = item.id.clone();
        boards.update(|state| state.items.push(item));
        navigate_detail(
            &path_for(RouteKey::BoardDetail, &[("BoardId", id.as_str())]),
            NavigateOptions::default(),
        );
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let _ = submit_post(());
    };

    view! {
        <div class="board-form-page">
            <h1>"New post"</h1>
            <form class="board-form" on:submit=on_submit>
                <input
                    class="board-form__input"
                    type="text"
                    placeholder="Author"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    class="board-form__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="board-form__contents"
                    placeholder="Write something..."
                    prop:value=move || contents.get()
                    on:input=move |ev| contents.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary board-form__submit" type="submit">
                    "Publish"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="board-form__message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
