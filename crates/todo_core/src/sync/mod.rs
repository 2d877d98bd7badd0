//! One-directional mirror of the item store into local storage.
//!
//! # Responsibility
//! - Hydrate tasks from the stored snapshot on startup.
//! - Write the durable projection whenever it differs from the last snapshot.
//!
//! # Invariants
//! - Load and save failures are logged, never propagated to the surface.
//! - A failed save does not roll back in-memory state.

pub mod persistence;
