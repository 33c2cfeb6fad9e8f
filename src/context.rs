//! Todo Context
//!
//! Controller handle shared with every component via the Leptos Context API.

use leptos::prelude::*;
use todo_core::TodoController;

use crate::browser::{LocalStorage, MathRandomIds};
use crate::store::{store_set_error, store_set_records, TodoStore};

type Controller = TodoController<LocalStorage, MathRandomIds>;

/// Single writer for the todo list. Each operation runs on the controller,
/// then mirrors the result into the reactive store.
#[derive(Clone, Copy)]
pub struct TodoContext {
    controller: StoredValue<Controller>,
    store: TodoStore,
}

impl TodoContext {
    pub fn new(controller: Controller, store: TodoStore) -> Self {
        let ctx = Self {
            controller: StoredValue::new(controller),
            store,
        };
        ctx.sync();
        ctx
    }

    /// Add a todo. On failure the message goes to the error region.
    /// Returns whether a record was added.
    pub fn add(&self, raw: &str) -> bool {
        let added = self
            .controller
            .try_update_value(|c| c.add(raw).map(|record| record.id.clone()));
        match added {
            Some(Ok(id)) => {
                log::debug!("[APP] Added {}", id);
                store_set_error(&self.store, None);
                self.sync();
                true
            }
            Some(Err(err)) => {
                store_set_error(&self.store, Some(err.to_string()));
                false
            }
            None => false,
        }
    }

    pub fn remove(&self, id: &str) {
        let removed = self.controller.try_update_value(|c| c.remove(id));
        if matches!(removed, Some(Some(_))) {
            self.sync();
        }
    }

    pub fn toggle(&self, id: &str) {
        let toggled = self.controller.try_update_value(|c| c.toggle(id));
        if matches!(toggled, Some(Some(_))) {
            self.sync();
        }
    }

    pub fn clear_all(&self) {
        self.controller.update_value(|c| c.clear_all());
        self.sync();
    }

    /// Input border color for the current error state
    pub fn border_color(&self, has_error: bool) -> String {
        self.controller
            .with_value(|c| c.config().border_color(has_error).to_string())
    }

    fn sync(&self) {
        self.controller
            .with_value(|c| store_set_records(&self.store, c.list().records()));
    }
}
