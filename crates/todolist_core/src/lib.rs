//! Core domain logic for the TODO list app.
//! This crate is the single source of truth for list state and invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod viewmodel;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId};
pub use store::todo_store::{MemoryTodoStore, StoreError, StoreResult, TodoStore};
pub use viewmodel::todo_view_model::TodoViewModel;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
