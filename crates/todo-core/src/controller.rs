//! Todo Controller
//!
//! Owns the list, the store handle and the id source. Every mutation
//! writes the full snapshot back to the store.

use log::{debug, info, warn};

use crate::config::TodoConfig;
use crate::error::{TodoError, TodoResult};
use crate::id::IdSource;
use crate::list::TodoList;
use crate::record::TodoRecord;
use crate::storage::KeyValueStore;

/// Reject empty and whitespace-only input
pub fn validate_text(raw: &str) -> TodoResult<()> {
    if raw.trim().is_empty() {
        return Err(TodoError::EmptyInput);
    }
    Ok(())
}

fn back_up_corrupt<S: KeyValueStore>(store: &S, config: &TodoConfig, json: &str) {
    let backup_key = config.backup_key();
    match store.set(&backup_key, json) {
        Ok(()) => warn!("[todo] corrupt snapshot kept under {:?}", backup_key),
        Err(err) => warn!("[todo] could not back up corrupt snapshot: {}; raw: {}", err, json),
    }
}

pub struct TodoController<S, G> {
    list: TodoList,
    store: S,
    ids: G,
    config: TodoConfig,
}

impl<S: KeyValueStore, G: IdSource> TodoController<S, G> {
    /// Seed the list from the persisted snapshot.
    ///
    /// A missing snapshot keeps `config.seed`. An unreadable or corrupt one
    /// is logged and also falls back to the seed; a corrupt one is first
    /// copied to `config.backup_key()` so the next write cannot lose it.
    pub fn load(store: S, ids: G, config: TodoConfig) -> Self {
        let key = &config.storage_key;
        let list = match store.get(key) {
            Ok(Some(json)) => match TodoList::from_snapshot(&json) {
                Ok(list) => {
                    info!("[todo] loaded {} records from {:?}", list.len(), key);
                    list
                }
                Err(err) => {
                    warn!("[todo] ignoring corrupt snapshot under {:?}: {}", key, err);
                    back_up_corrupt(&store, &config, &json);
                    TodoList::new(config.seed.clone())
                }
            },
            Ok(None) => {
                let seeded = config.seed.len();
                info!("[todo] no snapshot under {:?}, using {} seed records", key, seeded);
                TodoList::new(config.seed.clone())
            }
            Err(err) => {
                warn!("[todo] could not read {:?}: {}", key, err);
                TodoList::new(config.seed.clone())
            }
        };

        Self {
            list,
            store,
            ids,
            config,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Append a new incomplete record. The text is kept exactly as given.
    pub fn add(&mut self, raw: &str) -> TodoResult<&TodoRecord> {
        validate_text(raw)?;

        let record = TodoRecord::new(self.ids.next_id(), raw);
        debug!("[todo] add {} {:?}", record.id, record.text);
        let index = self.list.push(record);
        self.persist();
        Ok(&self.list.records()[index])
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<TodoRecord> {
        let removed = self.list.remove(id);
        match &removed {
            Some(_) => {
                debug!("[todo] remove {}", id);
                self.persist();
            }
            None => debug!("[todo] remove: no record {}", id),
        }
        removed
    }

    /// Flip the record's `complete` flag, returning the new value
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let complete = self.list.toggle(id);
        match complete {
            Some(complete) => {
                debug!("[todo] toggle {} -> complete={}", id, complete);
                self.persist();
            }
            None => debug!("[todo] toggle: no record {}", id),
        }
        complete
    }

    /// Empty the collection and the persisted snapshot
    pub fn clear_all(&mut self) {
        debug!("[todo] clear {} records", self.list.len());
        self.list.clear();
        self.persist();
    }

    pub fn snapshot(&self) -> TodoResult<String> {
        self.list.to_snapshot()
    }

    /// Write failures are logged; the in-memory list stays authoritative.
    fn persist(&self) {
        let written = self
            .snapshot()
            .and_then(|json| Ok(self.store.set(&self.config.storage_key, &json)?));
        if let Err(err) = written {
            warn!("[todo] failed to persist {} records: {}", self.list.len(), err);
        }
    }
}
