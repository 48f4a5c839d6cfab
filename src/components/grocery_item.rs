//! Grocery Item Component
//!
//! A single row, used both on the list and in the trash.

use leptos::prelude::*;

use grocery_core::Item;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn GroceryItem(item: Item) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let done = item.done;
    let deleted = item.deleted;
    let name = item.name.clone();
    let toggle_target = item.clone();
    let on_delete = Callback::new(move |_: ()| ctx.delete_item(item.clone()));

    view! {
        <div class=if done { "item-row completed" } else { "item-row" }>
            <input
                type="checkbox"
                checked=done
                on:change=move |_| ctx.toggle_done_item(toggle_target.clone())
            />

            <span class="item-text">{name.clone()}</span>

            // Items in the trash are removed for good, so ask first
            {if deleted {
                view! { <DeleteConfirmButton item_name=name.clone() on_confirm=on_delete /> }.into_any()
            } else {
                view! {
                    <button class="delete-btn" on:click=move |_| on_delete.run(())>"×"</button>
                }.into_any()
            }}
        </div>
    }
}
