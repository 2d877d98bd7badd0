//! Durable local key-value storage.
//!
//! # Responsibility
//! - Define the `LocalStorage` contract the persistence sync writes through.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings keyed by string keys.
//! - A write that would exceed the configured quota fails without changing
//!   the stored value.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryLocalStorage;
pub use sqlite::SqliteLocalStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    QuotaExceeded { requested_bytes: usize, quota_bytes: usize },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                requested_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded: {requested_bytes} bytes requested, quota is {quota_bytes}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Engine(value))
    }
}

/// Browser-style local key-value store.
pub trait LocalStorage {
    /// Returns `Ok(None)` when `key` has never been set or was removed.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - `StorageError::QuotaExceeded` when the write would pass the quota;
    ///   the previous value stays in place.
    /// - `StorageError::Db` for backend failures.
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key succeeds.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// Byte footprint counted against a quota, matching browser accounting of
/// key plus value length.
pub(crate) fn entry_bytes(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

pub(crate) fn check_quota(quota: Option<usize>, requested_bytes: usize) -> StorageResult<()> {
    match quota {
        Some(quota_bytes) if requested_bytes > quota_bytes => Err(StorageError::QuotaExceeded {
            requested_bytes,
            quota_bytes,
        }),
        _ => Ok(()),
    }
}
