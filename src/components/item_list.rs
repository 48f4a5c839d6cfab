//! Item List Components
//!
//! The live list and the trash below it.

use leptos::prelude::*;

use grocery_core::{active_items, deleted_items, restorable_items, Item};

use crate::components::GroceryItem;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Rows are re-mounted when a flag flips; names never change in place
fn row_key(item: &Item) -> (u32, bool, bool) {
    (item.id, item.done, item.deleted)
}

/// Items still to buy (or bought, but not thrown away)
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let items = move || store.items().with(|items| active_items(items).cloned().collect::<Vec<_>>());

    view! {
        <div class="item-list">
            <For
                each=items
                key=row_key
                children=move |item| view! { <GroceryItem item=item /> }
            />
        </div>
    }
}

/// Soft-deleted items with a restore button
#[component]
pub fn TrashList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let items = move || store.items().with(|items| deleted_items(items).cloned().collect::<Vec<_>>());
    let has_trash = move || store.items().with(|items| deleted_items(items).next().is_some());
    let can_restore = move || store.items().with(|items| restorable_items(items).next().is_some());

    view! {
        <Show when=has_trash>
            <section class="trash">
                <div class="trash-header">
                    <h2>"Trash"</h2>
                    <button
                        class="restore-btn"
                        disabled=move || !can_restore()
                        on:click=move |_| ctx.restore_items()
                    >
                        "Restore checked"
                    </button>
                </div>
                <For
                    each=items
                    key=row_key
                    children=move |item| view! { <GroceryItem item=item /> }
                />
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_tracks_flags_not_name() {
        let milk = Item::new(1, "Milk");
        let mut renamed = Item::new(1, "Oat milk");
        assert_eq!(row_key(&milk), row_key(&renamed));

        renamed.done = true;
        assert_ne!(row_key(&milk), row_key(&renamed));
    }
}
