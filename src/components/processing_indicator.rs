//! Processing Indicator Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shown while any action waits on the backend
#[component]
pub fn ProcessingIndicator() -> impl IntoView {
    let store = use_app_store();
    let busy = move || store.processing_tasks().with(|tasks| !tasks.is_empty());
    let labels = move || {
        store
            .processing_tasks()
            .with(|tasks| tasks.labels().collect::<Vec<_>>().join(", "))
    };

    view! {
        <Show when=busy>
            <span class="processing" title=labels>"Saving..."</span>
        </Show>
    }
}
