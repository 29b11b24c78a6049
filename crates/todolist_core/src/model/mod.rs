//! Domain model for the TODO list.
//!
//! # Responsibility
//! - Define the canonical record shared by the store and the view model.
//!
//! # Invariants
//! - Every record is identified by a `TodoId` that is unique within one
//!   store lifetime and never reassigned after deletion.

pub mod todo;
