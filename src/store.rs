//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! in [`crate::context`] is the source of truth; this is its rendered mirror.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Grouping, TodoRecord};

/// Reactive view state
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All records, in collection order
    pub records: Vec<TodoRecord>,
    /// Message in the error region, if any
    pub error: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored records
pub fn store_set_records(store: &TodoStore, records: &[TodoRecord]) {
    *store.records().write() = records.to_vec();
}

/// Records of one grouping, in collection order (tracked)
pub fn store_grouping(store: &TodoStore, grouping: Grouping) -> Vec<TodoRecord> {
    store.records().with(|records| {
        records
            .iter()
            .filter(|record| record.is_in(grouping))
            .cloned()
            .collect()
    })
}

pub fn store_set_error(store: &TodoStore, message: Option<String>) {
    *store.error().write() = message;
}

/// Current error message (tracked)
pub fn store_error(store: &TodoStore) -> Option<String> {
    store.error().get()
}
