//! Todo Widget App
//!
//! Input, the two todo lists and the clear-all control.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Grouping, TodoConfig, TodoController};

use crate::browser::{LocalStorage, MathRandomIds};
use crate::components::{ClearAllButton, TodoGroup, TodoInput};
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::default());
    provide_context(store);

    let controller = TodoController::load(LocalStorage, MathRandomIds, TodoConfig::default());
    log::info!("[APP] Loaded {} todos", controller.list().len());
    provide_context(TodoContext::new(controller, store));

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <TodoInput />

            <TodoGroup grouping=Grouping::Incomplete title="To do" />
            <TodoGroup grouping=Grouping::Complete title="Done" />

            <ClearAllButton />
        </main>
    }
}
