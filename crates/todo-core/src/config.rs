//! Widget Configuration
//!
//! Compile-time defaults. A static browser widget has no other config source.

use crate::record::{seed_records, TodoRecord};

/// Key the snapshot is stored under
pub const STORAGE_KEY: &str = "todos";

/// Suffix of the key a corrupt snapshot is copied to before being replaced
pub const BACKUP_SUFFIX: &str = ".corrupt";

/// Message shown when an empty or whitespace-only todo is submitted
pub const EMPTY_INPUT_MESSAGE: &str = "You cannot add an empty todo";

/// Input border color while an error is displayed
pub const ERROR_BORDER_COLOR: &str = "#ec4570";

/// Input border color otherwise
pub const NORMAL_BORDER_COLOR: &str = "#fff";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    pub storage_key: String,
    pub error_border_color: String,
    pub normal_border_color: String,
    /// Collection used when nothing has been persisted yet
    pub seed: Vec<TodoRecord>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            error_border_color: ERROR_BORDER_COLOR.to_string(),
            normal_border_color: NORMAL_BORDER_COLOR.to_string(),
            seed: seed_records(),
        }
    }
}

impl TodoConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_seed(mut self, seed: Vec<TodoRecord>) -> Self {
        self.seed = seed;
        self
    }

    /// Key holding the last snapshot that failed to parse
    pub fn backup_key(&self) -> String {
        format!("{}{}", self.storage_key, BACKUP_SUFFIX)
    }

    /// Border color for the input field
    pub fn border_color(&self, has_error: bool) -> &str {
        if has_error {
            &self.error_border_color
        } else {
            &self.normal_border_color
        }
    }
}
