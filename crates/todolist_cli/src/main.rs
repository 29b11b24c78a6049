//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the core crate through the whole load/add/toggle/delete flow.
//! - Keep output deterministic for quick local sanity checks.

use todolist_core::{default_log_level, init_logging, MemoryTodoStore, TodoViewModel};

fn print_snapshot(label: &str, view_model: &TodoViewModel<MemoryTodoStore>) {
    let todos = view_model.current_todos();
    let json = serde_json::to_string(&todos).unwrap_or_else(|_| "[]".to_string());
    println!("{label}: {json}");
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let log_dir = std::env::temp_dir().join("todolist-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    println!("todolist_core version={}", todolist_core::core_version());

    let view_model = TodoViewModel::new(MemoryTodoStore::new());

    view_model.load_todos().await;
    print_snapshot("seeded", &view_model);

    view_model.add_todo("Write report", "Quarterly summary").await;
    view_model.add_todo("Water plants", "Balcony only").await;
    print_snapshot("after add", &view_model);

    view_model.update_todo_status(2, true).await;
    view_model.delete_todo().await;
    print_snapshot("after delete of checked", &view_model);

    let last_error = view_model.errors().borrow().clone();
    if let Some(err) = last_error {
        eprintln!("last error: {err}");
    }
}
