//! Clear All Button Component

use leptos::prelude::*;

use crate::context::TodoContext;

/// Empties both lists and the saved snapshot, no confirmation
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    view! {
        <button id="clear-all" class="button clear-all" on:click=move |_| ctx.clear_all()>
            "Clear all"
        </button>
    }
}
