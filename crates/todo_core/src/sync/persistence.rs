//! Snapshot persistence for the task collection.
//!
//! The stored value under `storage_key` is a JSON array of `TaskRecord`
//! objects. Nothing else is written.

use crate::model::task::{Task, TaskRecord};
use crate::storage::LocalStorage;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Storage key of the task snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "slidev_todos_v1";

/// Outcome of one `PersistenceSync::sync` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Durable projection matched the last written snapshot.
    Unchanged,
    Written,
    /// Write failed; the next sync retries.
    Failed,
}

/// Mirrors the durable projection of the task list under one storage key.
///
/// Remembers the last snapshot it wrote so unchanged collections are not
/// rewritten.
#[derive(Debug, Clone)]
pub struct PersistenceSync {
    storage_key: String,
    last_written: Option<Vec<TaskRecord>>,
}

impl Default for PersistenceSync {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl PersistenceSync {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            last_written: None,
        }
    }

    /// Reads the stored snapshot.
    ///
    /// # Invariants
    /// - Missing, unreadable or non-array data yields an empty list.
    /// - Entries that fail to decode or validate, or repeat an earlier id,
    ///   are skipped; the rest keep their stored order.
    /// - Only a fully clean load counts as "already written", so any
    ///   recovery is rewritten on the next sync.
    ///
    /// # Side effects
    /// - Emits `tasks_load` events; failures log at `warn`.
    pub fn load(&mut self, storage: &impl LocalStorage) -> Vec<Task> {
        let key = self.storage_key.as_str();
        let raw = match storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=tasks_load module=sync status=empty key={key}");
                self.last_written = Some(Vec::new());
                return Vec::new();
            }
            Err(err) => {
                warn!("event=tasks_load module=sync status=error key={key} error_code=read_failed error={err}");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("event=tasks_load module=sync status=error key={key} error_code=not_an_array");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=tasks_load module=sync status=error key={key} error_code=parse_failed error={err}");
                return Vec::new();
            }
        };

        let total = entries.len();
        let mut seen = HashSet::new();
        let mut tasks = Vec::with_capacity(total);
        for (index, entry) in entries.into_iter().enumerate() {
            let record = match serde_json::from_value::<TaskRecord>(entry) {
                Ok(record) => record,
                Err(err) => {
                    warn!("event=tasks_load module=sync status=skip index={index} error_code=bad_record error={err}");
                    continue;
                }
            };
            let task = match Task::try_from(record) {
                Ok(task) => task,
                Err(err) => {
                    warn!("event=tasks_load module=sync status=skip index={index} error_code=invalid_record error={err}");
                    continue;
                }
            };
            if !seen.insert(task.id.clone()) {
                warn!("event=tasks_load module=sync status=skip index={index} error_code=duplicate_id");
                continue;
            }
            tasks.push(task);
        }

        info!(
            "event=tasks_load module=sync status=ok key={key} count={} skipped={}",
            tasks.len(),
            total - tasks.len()
        );
        if tasks.len() == total {
            self.last_written = Some(tasks.iter().map(Task::to_record).collect());
        }
        tasks
    }

    /// Writes the durable projection of `tasks` when it differs from the last
    /// successfully written snapshot.
    ///
    /// # Errors
    /// - Never returns an error. Serialization or storage failures are logged
    ///   at `error` and reported as `SyncOutcome::Failed`; the caller's
    ///   in-memory tasks are left as they are and the next call retries.
    pub fn sync(&mut self, storage: &mut impl LocalStorage, tasks: &[Task]) -> SyncOutcome {
        let snapshot: Vec<TaskRecord> = tasks.iter().map(Task::to_record).collect();
        if self.last_written.as_ref() == Some(&snapshot) {
            return SyncOutcome::Unchanged;
        }

        let key = self.storage_key.as_str();
        let payload = match serde_json::to_string(&snapshot) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=tasks_save module=sync status=error key={key} error_code=serialize_failed error={err}");
                return SyncOutcome::Failed;
            }
        };

        match storage.set_item(key, &payload) {
            Ok(()) => {
                debug!(
                    "event=tasks_save module=sync status=ok key={key} count={} bytes={}",
                    snapshot.len(),
                    payload.len()
                );
                self.last_written = Some(snapshot);
                SyncOutcome::Written
            }
            Err(err) => {
                error!("event=tasks_save module=sync status=error key={key} error_code=write_failed error={err}");
                SyncOutcome::Failed
            }
        }
    }
}

/// Serializes the durable projection of `tasks` as stored under the key.
pub fn encode_snapshot(tasks: &[Task]) -> serde_json::Result<String> {
    let records: Vec<TaskRecord> = tasks.iter().map(Task::to_record).collect();
    serde_json::to_string(&records)
}
