//! SQLite file behind `SqliteLocalStorage`.
//!
//! # Responsibility
//! - Open the database that holds the `local_storage` key-value table.
//! - Bring its schema up to date before any key is read or written.
//!
//! # Invariants
//! - A returned connection always has the `local_storage` table.
//! - A file written by a newer build is refused, not downgraded.
//!
//! # See also
//! - `storage::sqlite` for the key-value contract on top of this table.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the storage database.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected an open, pragma or migration statement.
    Engine(rusqlite::Error),
    /// `PRAGMA user_version` is ahead of every migration this build ships.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(err) => write!(f, "local storage database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "local storage schema v{found} was written by a newer build (this build reads up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Engine(value)
    }
}
