//! Todo Row Component
//!
//! One `<li>` with its label, remove and complete buttons.

use leptos::prelude::*;
use todo_core::TodoRecord;
use wasm_bindgen::JsCast;

use crate::context::TodoContext;

/// Attribute carrying the record id on each row control
const TODO_ID_ATTR: &str = "data-todo-id";

/// Read the record id bound to the clicked control
fn todo_id_from_event(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest(&format!("[{}]", TODO_ID_ATTR)).ok()??;
    control.get_attribute(TODO_ID_ATTR)
}

/// A single todo row
#[component]
pub fn TodoRow(record: TodoRecord) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    let on_remove = move |ev: web_sys::MouseEvent| match todo_id_from_event(&ev) {
        Some(id) => ctx.remove(&id),
        None => log::warn!("[APP] Remove clicked without a bound todo id"),
    };
    let on_toggle = move |ev: web_sys::MouseEvent| match todo_id_from_event(&ev) {
        Some(id) => ctx.toggle(&id),
        None => log::warn!("[APP] Toggle clicked without a bound todo id"),
    };

    let TodoRecord { id, text, complete } = record;

    view! {
        <li class="todo-item" id=id.clone()>
            <span class:checked=complete>{text}</span>
            <button class="button remove" data-todo-id=id.clone() on:click=on_remove>
                "✖︎"
            </button>
            <button class="button complete" data-todo-id=id.clone() on:click=on_toggle>
                "✔︎"
            </button>
        </li>
    }
}
