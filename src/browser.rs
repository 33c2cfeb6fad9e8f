//! Browser Bindings
//!
//! `localStorage` and `Math.random()` behind the core's traits.

use todo_core::{format_id, IdSource, KeyValueStore, StoreError, StoreResult};

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Ids drawn from `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandomIds;

impl IdSource for MathRandomIds {
    fn next_id(&self) -> String {
        format_id(js_sys::Math::random())
    }
}
