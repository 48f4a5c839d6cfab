//! Grocery List App
//!
//! Main application component: list, trash and in-flight indicator.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::Actions;

use crate::components::{ErrorBanner, ItemList, NewItemForm, ProcessingIndicator, TrashList};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, Actions::new(config.build_service()));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| ctx.load_items());

    view! {
        <main class="app-layout">
            <header class="title-bar">
                <h1>"Groceries"</h1>
                <ProcessingIndicator />
            </header>

            <ErrorBanner />
            <NewItemForm />
            <ItemList />
            <TrashList />
        </main>
    }
}
