//! Todo Record
//!
//! One task entry and the grouping its row is rendered into.

use serde::{Deserialize, Serialize};

/// A single todo. Field order is the snapshot's key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Opaque unique token, fixed at creation
    pub id: String,
    /// User-supplied label, never blank
    pub text: String,
    /// Completion status
    pub complete: bool,
}

impl TodoRecord {
    /// Create a new incomplete record
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            complete: false,
        }
    }

    pub fn grouping(&self) -> Grouping {
        Grouping::of(self.complete)
    }

    /// Whether this record's row belongs in `grouping`
    pub fn is_in(&self, grouping: Grouping) -> bool {
        self.grouping() == grouping
    }
}

/// Visual container a record's row lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    Incomplete,
    Complete,
}

impl Grouping {
    pub const ALL: [Grouping; 2] = [Grouping::Incomplete, Grouping::Complete];

    pub fn of(complete: bool) -> Self {
        if complete {
            Grouping::Complete
        } else {
            Grouping::Incomplete
        }
    }

    pub fn other(self) -> Self {
        match self {
            Grouping::Incomplete => Grouping::Complete,
            Grouping::Complete => Grouping::Incomplete,
        }
    }

    /// DOM id of the list element holding this grouping
    pub fn element_id(self) -> &'static str {
        match self {
            Grouping::Incomplete => "incomplete-todos",
            Grouping::Complete => "complete-todos",
        }
    }
}

/// Built-in collection shown before anything is persisted
pub fn seed_records() -> Vec<TodoRecord> {
    vec![
        TodoRecord {
            id: "_317kdlbkp".to_string(),
            text: "Buy Milk".to_string(),
            complete: false,
        },
        TodoRecord {
            id: "_a7p2joa8h".to_string(),
            text: "Buy a house".to_string(),
            complete: true,
        },
    ]
}
