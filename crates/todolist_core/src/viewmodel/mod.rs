//! Presentation state holders.
//!
//! # Responsibility
//! - Mediate between the store and subscribers (UI shells, tests).
//! - Own the observable snapshot and error channels.
//!
//! # Invariants
//! - Subscribers only ever see snapshots; the store's list is never shared.
//! - Store failures surface on the error channel, never as panics.

pub mod todo_view_model;
