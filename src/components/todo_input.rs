//! Todo Input Component
//!
//! Text field plus error region for adding todos.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::TodoContext;
use crate::store::{store_error, use_todo_store};

/// Adds a todo when the value is committed (Enter or blur)
#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();
    let store = use_todo_store();
    let input_ref = NodeRef::<Input>::new();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if ctx.add(&value) {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    };

    view! {
        <div class="todo-input">
            <input
                id="input-field"
                type="text"
                placeholder="What needs to be done?"
                node_ref=input_ref
                style:border-color=move || ctx.border_color(store_error(&store).is_some())
                on:change=on_change
            />
            <p class="error">{move || store_error(&store).unwrap_or_default()}</p>
        </div>
    }
}
