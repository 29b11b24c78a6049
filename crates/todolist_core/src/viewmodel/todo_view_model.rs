//! TODO list view model.
//!
//! # Responsibility
//! - Drive store mutations from user intents (load/add/toggle/delete).
//! - Publish the resulting sequence on a replay-1 observable channel.
//! - Assign record ids and keep them unique for the store's lifetime.
//!
//! # Invariants
//! - Every successful operation republishes the full sequence; there is no
//!   in-place mutation of an already published snapshot.
//! - Ids grow monotonically: `max(existing ids, high water) + 1`, so an id
//!   is never reused even after the highest record is deleted.
//! - Failures inside the background hop are converted to the error channel
//!   and never escape to the caller.

use crate::model::todo::{Todo, TodoId};
use crate::store::todo_store::{StoreError, StoreResult, TodoStore};
use log::{error, info};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task;

/// Observable state holder wrapping one [`TodoStore`].
///
/// By convention exactly one view model wraps a given store. Each operation
/// hops to a blocking-friendly context for the store call and publishes on
/// return; concurrently triggered operations have no mutual ordering, the
/// last published snapshot wins.
pub struct TodoViewModel<S: TodoStore + 'static> {
    store: Arc<Mutex<S>>,
    last_id: Arc<AtomicU32>,
    todos_tx: watch::Sender<Vec<Todo>>,
    error_tx: watch::Sender<Option<String>>,
}

impl<S: TodoStore + 'static> TodoViewModel<S> {
    /// Creates a view model taking ownership of the store.
    ///
    /// The list channel starts empty and the error channel starts clear;
    /// nothing is published until the first operation completes.
    pub fn new(store: S) -> Self {
        let (todos_tx, _) = watch::channel(Vec::new());
        let (error_tx, _) = watch::channel(None);
        Self {
            store: Arc::new(Mutex::new(store)),
            last_id: Arc::new(AtomicU32::new(0)),
            todos_tx,
            error_tx,
        }
    }

    /// Subscribes to the published sequence.
    ///
    /// Replay-1 semantics: the receiver immediately holds the latest known
    /// snapshot, intermediate values may be skipped under contention.
    pub fn todos(&self) -> watch::Receiver<Vec<Todo>> {
        self.todos_tx.subscribe()
    }

    /// Subscribes to the last error text, `None` while no failure occurred.
    pub fn errors(&self) -> watch::Receiver<Option<String>> {
        self.error_tx.subscribe()
    }

    /// Returns the latest published snapshot without subscribing.
    pub fn current_todos(&self) -> Vec<Todo> {
        self.todos_tx.borrow().clone()
    }

    /// Loads the current sequence from the store and publishes it.
    pub async fn load_todos(&self) {
        self.run_and_publish("todos_loaded", |store| store.load())
            .await;
    }

    /// Adds a new unchecked record and republishes the full sequence.
    ///
    /// The id is assigned inside the same critical section as the append,
    /// so adds racing each other still get unique ids.
    pub async fn add_todo(&self, title: impl Into<String>, description: impl Into<String>) {
        let title = title.into();
        let description = description.into();
        let last_id = Arc::clone(&self.last_id);
        self.run_and_publish("todo_added", move |store| {
            let current = store.load()?;
            let id = next_todo_id(&current, last_id.load(Ordering::Acquire));
            last_id.store(id, Ordering::Release);
            store.add(Todo::new(id, title, description))?;
            store.load()
        })
        .await;
    }

    /// Sets the completion flag on one record and republishes.
    ///
    /// Unknown ids are a silent no-op; the sequence is republished either
    /// way so subscribers stay consistent with the store.
    pub async fn update_todo_status(&self, id: TodoId, is_checked: bool) {
        self.run_and_publish("todo_status_updated", move |store| {
            store.set_checked(id, is_checked)?;
            store.load()
        })
        .await;
    }

    /// Deletes every checked record and republishes the survivors.
    pub async fn delete_todo(&self) {
        self.run_and_publish("todos_deleted", |store| {
            store.delete_checked()?;
            store.load()
        })
        .await;
    }

    /// Runs one store operation off the caller's context and publishes.
    ///
    /// On success the returned sequence replaces the published snapshot; on
    /// failure the snapshot is left untouched and the error text is
    /// published instead.
    async fn run_and_publish<F>(&self, event: &'static str, op: F)
    where
        F: FnOnce(&mut S) -> StoreResult<Vec<Todo>> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let joined = task::spawn_blocking(move || {
            let mut guard = store
                .lock()
                .map_err(|_| StoreError::failed("store lock poisoned"))?;
            op(&mut guard)
        })
        .await;

        // A panicked or cancelled hop collapses into the same generic
        // failure as a store error.
        let result = joined.unwrap_or_else(|join_err| {
            Err(StoreError::failed(format!(
                "background task failed: {join_err}"
            )))
        });

        match result {
            Ok(todos) => {
                info!(
                    "event={event} module=viewmodel status=ok count={}",
                    todos.len()
                );
                self.todos_tx.send_replace(todos);
            }
            Err(err) => {
                error!("event={event} module=viewmodel status=error reason={err}");
                self.error_tx.send_replace(Some(err.to_string()));
            }
        }
    }
}

/// Computes the next record id.
///
/// `1` for an empty sequence, otherwise one past the larger of the current
/// maximum and the high-water mark of previously assigned ids. Saturates at
/// the id ceiling instead of wrapping.
fn next_todo_id(todos: &[Todo], high_water: TodoId) -> TodoId {
    todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .unwrap_or(0)
        .max(high_water)
        .saturating_add(1)
}
