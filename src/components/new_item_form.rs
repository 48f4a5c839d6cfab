//! New Item Form Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for adding an item to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (new_name, set_new_name) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() { return; }

        ctx.add_item(name);
        set_new_name.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add groceries..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
