//! Surface-facing use-case layer.
//!
//! # Responsibility
//! - Route surface actions into the item store.
//! - Trigger persistence after every mutation.
//! - Hold the active filter and expose the view projection.

pub mod todo_session;
