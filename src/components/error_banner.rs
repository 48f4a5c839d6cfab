//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Last action failure, dismissable
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        {move || ctx.last_error.get().map(|message| view! {
            <div class="error-banner">
                <span>{message}</span>
                <button class="cancel-btn" on:click=move |_| ctx.last_error.set(None)>"×"</button>
            </div>
        })}
    }
}
