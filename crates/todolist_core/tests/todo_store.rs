use todolist_core::{MemoryTodoStore, Todo, TodoStore};

#[test]
fn new_store_is_seeded_with_two_unchecked_records() {
    let store = MemoryTodoStore::new();

    let todos = store.load().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[1].id, 2);
    assert!(todos.iter().all(|todo| !todo.is_checked));
}

#[test]
fn load_is_idempotent_without_mutation() {
    let store = MemoryTodoStore::new();

    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn load_returns_a_snapshot_not_a_live_reference() {
    let store = MemoryTodoStore::new();

    let mut snapshot = store.load().unwrap();
    snapshot[0].set_checked(true);
    snapshot.clear();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(!reloaded[0].is_checked);
}

#[test]
fn add_appends_at_the_end_preserving_insertion_order() {
    let mut store = MemoryTodoStore::with_todos(vec![Todo::new(1, "first", "")]);

    store.add(Todo::new(2, "second", "")).unwrap();
    store.add(Todo::new(3, "third", "")).unwrap();

    let ids: Vec<_> = store.load().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn delete_checked_removes_exactly_the_checked_records() {
    let mut store = MemoryTodoStore::with_todos(vec![
        Todo::new(1, "keep", ""),
        Todo::new(2, "drop", ""),
        Todo::new(3, "keep too", ""),
        Todo::new(4, "drop too", ""),
    ]);
    store.set_checked(2, true).unwrap();
    store.set_checked(4, true).unwrap();

    store.delete_checked().unwrap();

    let ids: Vec<_> = store.load().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn delete_checked_with_nothing_checked_is_a_noop() {
    let mut store = MemoryTodoStore::new();

    store.delete_checked().unwrap();

    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn set_checked_targets_only_the_matching_record() {
    let mut store = MemoryTodoStore::new();

    store.set_checked(2, true).unwrap();

    let todos = store.load().unwrap();
    assert!(!todos[0].is_checked);
    assert!(todos[1].is_checked);

    store.set_checked(2, false).unwrap();
    let todos = store.load().unwrap();
    assert!(!todos[1].is_checked);
}

#[test]
fn set_checked_with_unknown_id_is_a_silent_noop() {
    let mut store = MemoryTodoStore::new();

    store.set_checked(99, true).unwrap();

    let todos = store.load().unwrap();
    assert!(todos.iter().all(|todo| !todo.is_checked));
}

#[test]
fn store_can_start_empty() {
    let store = MemoryTodoStore::with_todos(Vec::new());
    assert!(store.load().unwrap().is_empty());
}
