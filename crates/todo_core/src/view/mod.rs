//! Read-only projections of the task collection.

pub mod projection;
