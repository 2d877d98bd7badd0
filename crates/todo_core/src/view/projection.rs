//! Filtered views and counters derived from the task list.
//!
//! # Invariants
//! - Nothing here mutates tasks.
//! - `remaining_count + completed_count == tasks.len()`.
//! - `Active` and `Completed` partition the collection.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Label shown on the filter control.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl Display for UnknownFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|active|completed",
            self.0
        )
    }
}

impl Error for UnknownFilter {}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Tasks matching `filter`, in collection order.
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Incomplete tasks.
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// Everything the surface needs for one paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    pub filter: Filter,
    pub rows: Vec<&'a Task>,
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

impl<'a> ViewModel<'a> {
    pub fn project(tasks: &'a [Task], filter: Filter) -> Self {
        Self {
            filter,
            rows: filtered(tasks, filter),
            total: tasks.len(),
            remaining: remaining_count(tasks),
            completed: completed_count(tasks),
        }
    }

    /// The clear-completed control is shown only when something is completed.
    pub fn show_clear_completed(&self) -> bool {
        self.completed > 0
    }

    pub fn items_left_label(&self) -> String {
        let noun = if self.remaining == 1 { "item" } else { "items" };
        format!("{} {noun} left", self.remaining)
    }
}
