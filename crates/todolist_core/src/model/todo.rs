//! Todo domain model.
//!
//! # Responsibility
//! - Define the single record shape carried from store to subscribers.
//! - Provide completion-flag helpers for the toggle use-case.
//!
//! # Invariants
//! - `id` is assigned by the view model and stays stable for the record's
//!   lifetime; it is never reused after the record is deleted.
//! - New records always start unchecked.

use serde::{Deserialize, Serialize};

/// Stable identifier for a TODO record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = u32;

/// One entry of the TODO list.
///
/// The record is plain data: completion state is the only mutable aspect,
/// and all mutation happens inside the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Monotonically assigned id, unique within the store's lifetime.
    pub id: TodoId,
    /// Short user-facing title.
    pub title: String,
    /// Free-form description shown in the detail row.
    pub description: String,
    /// Completion flag driven by the list's checkboxes.
    pub is_checked: bool,
}

impl Todo {
    /// Creates a new unchecked record with the given id.
    pub fn new(id: TodoId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_checked: false,
        }
    }

    /// Sets the completion flag.
    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }
}
