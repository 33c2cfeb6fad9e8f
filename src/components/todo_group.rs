//! Todo Group Component
//!
//! One of the two lists (incomplete or complete).

use leptos::prelude::*;
use todo_core::{Grouping, TodoRecord};

use super::TodoRow;
use crate::store::{store_grouping, use_todo_store};

#[component]
pub fn TodoGroup(grouping: Grouping, #[prop(into)] title: String) -> impl IntoView {
    let store = use_todo_store();

    view! {
        <section class="todo-group">
            <h2>{title}</h2>
            <ul id=grouping.element_id() class="todo-list">
                <For
                    each=move || store_grouping(&store, grouping)
                    key=|record: &TodoRecord| record.id.clone()
                    children=move |record| view! { <TodoRow record=record /> }
                />
            </ul>
        </section>
    }
}
