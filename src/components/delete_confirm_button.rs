//! Delete Confirm Button Component
//!
//! Permanent delete of a trashed item, behind an inline "are you sure".

use leptos::prelude::*;

fn confirm_prompt(item_name: &str) -> String {
    format!("Delete \"{}\" forever?", item_name)
}

/// × button that swaps itself for a named confirmation prompt.
///
/// # Arguments
/// * `item_name` - Shown in the prompt so the user knows what goes
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let prompt = confirm_prompt(&item_name);

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button class="cancel-btn" on:click=move |_| confirming.set(false)>"Keep"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title="Delete forever"
                    on:click=move |_| confirming.set(true)
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
