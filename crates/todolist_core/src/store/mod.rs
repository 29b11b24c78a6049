//! Store layer owning the TODO sequence.
//!
//! # Responsibility
//! - Define the use-case oriented store contract.
//! - Keep list-mutation details behind the store boundary.
//!
//! # Invariants
//! - The store is the only component that mutates the sequence; callers get
//!   snapshots, never references into the backing list.
//! - Mutations preserve insertion order of surviving records.

pub mod todo_store;
