//! In-memory task collection and its user-facing mutations.
//!
//! # Responsibility
//! - Own the ordered task list for the lifetime of a session.
//! - Apply surface actions as total operations over that list.
//!
//! # Invariants
//! - Unknown ids are silent no-ops, never errors.
//! - New tasks are prepended (newest first).

pub mod item_store;
