//! TODO store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable load/add/toggle/bulk-delete APIs over the owned list.
//! - Return semantic errors at the trait seam even though the in-memory
//!   implementation cannot fail.
//!
//! # Invariants
//! - `delete_checked` removes exactly the checked records and keeps the
//!   relative order of the survivors.
//! - `set_checked` with an unknown id is a silent no-op.
//! - No interior locking: exclusive access is the owner's job.

use crate::model::todo::{Todo, TodoId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic store failure surfaced as free-form text.
///
/// The in-memory store never constructs this; the variant exists so that
/// fallible backends (a file or database store) can share the trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Failed(String),
}

impl StoreError {
    /// Builds the generic operation-failure case.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(message) => write!(f, "store operation failed: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Store interface for TODO list mutations.
pub trait TodoStore: Send {
    /// Returns a snapshot of the current sequence without mutating it.
    fn load(&self) -> StoreResult<Vec<Todo>>;
    /// Appends one record to the end of the sequence. No duplicate-id check.
    fn add(&mut self, todo: Todo) -> StoreResult<()>;
    /// Removes every record whose completion flag is set.
    fn delete_checked(&mut self) -> StoreResult<()>;
    /// Sets the completion flag on the matching record; no-op when absent.
    fn set_checked(&mut self, id: TodoId, checked: bool) -> StoreResult<()>;
}

/// In-memory TODO store backing the single main screen.
///
/// State lives for as long as the store does; there is no persistence, so
/// everything is lost when the owning component is torn down.
pub struct MemoryTodoStore {
    todos: Vec<Todo>,
}

impl MemoryTodoStore {
    /// Creates a store seeded with the two fixed sample records.
    pub fn new() -> Self {
        Self::with_todos(vec![
            Todo::new(1, "First sample", "Seeded sample item 1"),
            Todo::new(2, "Second sample", "Seeded sample item 2"),
        ])
    }

    /// Creates a store over a caller-provided sequence.
    ///
    /// Used by tests and by callers that want to start empty.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for MemoryTodoStore {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn add(&mut self, todo: Todo) -> StoreResult<()> {
        self.todos.push(todo);
        Ok(())
    }

    fn delete_checked(&mut self) -> StoreResult<()> {
        self.todos.retain(|todo| !todo.is_checked);
        Ok(())
    }

    fn set_checked(&mut self, id: TodoId, checked: bool) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.set_checked(checked);
        }
        Ok(())
    }
}
