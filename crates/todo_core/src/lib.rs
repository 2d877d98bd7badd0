//! Core logic for the slide-deck task list.
//! Owns the task collection, its local-storage mirror and derived views.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;
pub mod sync;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::clock::{Clock, SystemClock};
pub use model::task::{Task, TaskId, TaskRecord, TaskValidationError};
pub use service::todo_session::TodoSession;
pub use storage::{
    LocalStorage, MemoryLocalStorage, SqliteLocalStorage, StorageError, StorageResult,
};
pub use store::item_store::ItemStore;
pub use sync::persistence::{encode_snapshot, PersistenceSync, SyncOutcome, DEFAULT_STORAGE_KEY};
pub use view::projection::{completed_count, filtered, remaining_count, Filter, ViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
