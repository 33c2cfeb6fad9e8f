//! Todo List
//!
//! Ordered in-memory collection. Pure, no I/O.

use crate::error::TodoResult;
use crate::record::{Grouping, TodoRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    records: Vec<TodoRecord>,
}

impl TodoList {
    pub fn new(records: Vec<TodoRecord>) -> Self {
        Self { records }
    }

    /// Parse a persisted snapshot (JSON array of records)
    pub fn from_snapshot(json: &str) -> TodoResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Serialize to the persisted snapshot format
    pub fn to_snapshot(&self) -> TodoResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records in one grouping, in collection order
    pub fn in_grouping(&self, grouping: Grouping) -> impl Iterator<Item = &TodoRecord> {
        self.records
            .iter()
            .filter(move |record| record.is_in(grouping))
    }

    /// Append to the end, returning the new record's index
    pub fn push(&mut self, record: TodoRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Remove every record with `id`, returning the first one
    pub fn remove(&mut self, id: &str) -> Option<TodoRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let removed = self.records.remove(index);
        self.records.retain(|record| record.id != id);
        Some(removed)
    }

    /// Flip `complete`, returning the new value
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.complete = !record.complete;
        Some(record.complete)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
