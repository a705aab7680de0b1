//! Blocking prompt dialog used by the guards and auth pages.
//!
//! DESIGN
//! ======
//! One component covers both prompt shapes: single-action (confirm only,
//! backdrop inert) and dual-action (confirm plus cancel, backdrop
//! cancels). Omitting `on_cancel` selects the single-action shape.

use leptos::prelude::*;

/// Modal prompt with a title, a description, and one or two actions.
#[component]
pub fn PromptModal(
    title: &'static str,
    description: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    #[prop(optional)] cancel_label: Option<&'static str>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let on_backdrop = move |_| {
        if let Some(cancel) = on_cancel {
            cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div class="dialog dialog--prompt" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__description">{description}</p>
                <div class="dialog__actions">
                    {on_cancel.map(|cancel| {
                        view! {
                            <button class="btn" on:click=move |_| cancel.run(())>
                                {cancel_label.unwrap_or("Cancel")}
                            </button>
                        }
                    })}
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
