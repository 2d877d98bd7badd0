//! Task domain model.
//!
//! # Responsibility
//! - Define the in-memory task record and its durable projection.
//! - Provide the clock seam used to stamp creation/update times.
//!
//! # Invariants
//! - Every task is identified by a stable, non-empty `TaskId`.
//! - The durable projection never carries the transient editing flag.

pub mod clock;
pub mod task;
