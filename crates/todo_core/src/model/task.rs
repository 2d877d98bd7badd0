//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record mutated by the item store.
//! - Define `TaskRecord`, the durable projection written to local storage.
//!
//! # Invariants
//! - `title` is trimmed and non-empty after every successful mutation.
//! - `updated_at >= created_at`, and every bump strictly advances `updated_at`.
//! - `editing` is transient UI state and never reaches `TaskRecord`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable task identifier.
pub type TaskId = String;

/// Validation failures for task state read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyTitle,
    UpdatedBeforeCreated { created_at: i64, updated_at: i64 },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::UpdatedBeforeCreated {
                created_at,
                updated_at,
            } => write!(
                f,
                "updatedAt ({updated_at}) must be >= createdAt ({created_at})"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry as held by the item store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds, never earlier than `created_at`.
    pub updated_at: i64,
    /// UI-only edit mode marker.
    pub editing: bool,
}

impl Task {
    /// Creates an incomplete task with a fresh id.
    ///
    /// Returns `None` when `title` trims to an empty string.
    pub fn new(title: &str, now_ms: i64) -> Option<Self> {
        let title = normalize_title(title)?;
        Some(Self {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
            created_at: now_ms,
            updated_at: now_ms,
            editing: false,
        })
    }

    /// Advances `updated_at`, strictly, even within one clock tick.
    pub fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms.max(self.updated_at.saturating_add(1));
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.updated_at < self.created_at {
            return Err(TaskValidationError::UpdatedBeforeCreated {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }

    /// Returns the durable projection of this task.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Durable projection of a task, serialized with the storage wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: record.id,
            title: record.title.trim().to_string(),
            completed: record.completed,
            created_at: record.created_at,
            updated_at: record.updated_at,
            editing: false,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Trims a raw title, returning `None` for empty/whitespace-only input.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
