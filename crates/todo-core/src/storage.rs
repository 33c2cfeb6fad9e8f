//! Key-Value Store
//!
//! Abstract persistence seam. The browser backend lives in the UI crate;
//! [`MemoryStore`] backs tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StoreResult;

/// String key-value store, in the shape of `window.localStorage`
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("todos").unwrap(), None);

        store.set("todos", "[]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_store_through_reference() {
        fn overwrite<S: KeyValueStore>(store: S) {
            store.set("k", "w").unwrap();
        }

        let store = MemoryStore::with_entry("k", "v");
        overwrite(&store);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }
}
