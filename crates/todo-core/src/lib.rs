//! Todo Core
//!
//! Platform-free todo list: records, validation, id formatting and the
//! key-value persistence seam. The browser UI plugs `localStorage` and
//! `Math.random()` in through the [`KeyValueStore`] and [`IdSource`] traits.

mod config;
mod controller;
mod error;
mod id;
mod list;
mod record;
mod storage;

#[cfg(test)]
mod tests;

pub use config::{
    TodoConfig, BACKUP_SUFFIX, EMPTY_INPUT_MESSAGE, ERROR_BORDER_COLOR, NORMAL_BORDER_COLOR,
    STORAGE_KEY,
};
pub use controller::{validate_text, TodoController};
pub use error::{StoreError, StoreResult, TodoError, TodoResult};
pub use id::{format_id, IdSource, ID_DIGITS};
pub use list::TodoList;
pub use record::{seed_records, Grouping, TodoRecord};
pub use storage::{KeyValueStore, MemoryStore};
