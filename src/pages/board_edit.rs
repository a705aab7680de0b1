//! Edit-post form, prefilled from the stored post, with a guarded submit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::guard::action_guard::ActionGuard;
use crate::pages::board_form::validate_board_input;
use crate::routes::{RouteKey, path_for};
use crate::state::boards::BoardsState;

#[component]
pub fn BoardEditPage() -> impl IntoView {
    let boards = expect_context::<RwSignal<BoardsState>>();
    let guard = ActionGuard::expect();
    let params = use_params_map();
    let navigate = use_navigate();

    let seed_id = params.read_untracked().get("BoardId").unwrap_or_default();
    let seed = boards.with_untracked(|state| {
        state.items.iter().find(|item| item.id == seed_id).cloned()
    });

    let author = RwSignal::new(seed.as_ref().map(|i| i.author.clone()).unwrap_or_default());
    let title = RwSignal::new(seed.as_ref().map(|i| i.title.clone()).unwrap_or_default());
    let contents = RwSignal::new(seed.as_ref().map(|i| i.contents.clone()).unwrap_or_default());
    let message = RwSignal::new(String::new());

    let board_id = move || params.read().get("BoardId").unwrap_or_default();
    let known = move || {
        let id = board_id();
        boards.get().items.iter().any(|item| item.id == id)
    };

    let navigate_detail = navigate.clone();
    let submit_edit = guard.guard(move |()| {
        let input = match validate_board_input(&author.get(), &title.get(), &contents.get()) {
            Ok(input) => input,
            Err(reason) => {
                message.set(reason.to_owned());
                return;
            }
        };
        let id = board_id();
        boards.update(|state| {
            if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                item.author = input.author.clone();
                item.title = input.title.clone();
                item.contents = input.contents.clone();
            }
        });
        navigate_detail(
            &path_for(RouteKey::BoardDetail, &[("BoardId", id.as_str())]),
            NavigateOptions::default(),
        );
    });
    // Callback so the handler stays usable inside the re-runnable Show body.
    let on_save = Callback::new(move |()| {
        let _ = submit_edit(());
    });

    view! {
        <div class="board-form-page">
            <h1>"Edit post"</h1>
            <Show
                when=known
                fallback=move || view! { <p class="board-form__missing">"Post not found."</p> }
            >
                <form
                    class="board-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
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
                        "Save changes"
                    </button>
                </form>
            </Show>
            <Show when=move || !message.get().is_empty()>
                <p class="board-form__message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
