//! Ordered task collection.
//!
//! # Responsibility
//! - Implement add/toggle/delete/edit/clear-completed over the task list.
//! - Track the one-shot focus request raised when a task enters edit mode.
//!
//! # Invariants
//! - Task ids are unique within the collection.
//! - Every mutator returns whether the collection changed; none can fail.

use crate::model::clock::{Clock, SystemClock};
use crate::model::task::{normalize_title, Task, TaskId};
use log::debug;

/// Ordered task list mutated by surface actions.
#[derive(Debug)]
pub struct ItemStore<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    clock: C,
    focus_request: Option<TaskId>,
}

impl ItemStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ItemStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ItemStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
            focus_request: None,
        }
    }

    /// Replaces the whole collection with hydrated tasks.
    ///
    /// Editing flags are dropped; later duplicates of an id are discarded.
    pub fn hydrate(&mut self, tasks: Vec<Task>) {
        self.tasks.clear();
        self.focus_request = None;
        for mut task in tasks {
            if self.position(&task.id).is_some() {
                continue;
            }
            task.editing = false;
            self.tasks.push(task);
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id of the task currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<&str> {
        self.tasks
            .iter()
            .find(|task| task.editing)
            .map(|task| task.id.as_str())
    }

    /// Adds a task at the front of the list.
    ///
    /// Returns the new id, or `None` when the trimmed title is empty.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let task = Task::new(title, self.clock.now_ms())?;
        let id = task.id.clone();
        debug!("event=task_add module=store status=ok id={id}");
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flips `completed` and bumps `updated_at`.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now = self.clock.now_ms();
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        task.completed = !task.completed;
        task.touch(now);
        debug!(
            "event=task_toggle module=store status=ok id={id} completed={}",
            task.completed
        );
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        if self.focus_request.as_deref() == Some(id) {
            self.focus_request = None;
        }
        debug!("event=task_delete module=store status=ok id={id}");
        true
    }

    /// Puts a task into edit mode and queues a focus request for the renderer.
    ///
    /// Any other task still in edit mode leaves it without committing.
    pub fn start_edit(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        for task in &mut self.tasks {
            task.editing = task.id == id;
        }
        self.focus_request = Some(id.to_string());
        true
    }

    /// Commits an edit.
    ///
    /// # Invariants
    /// - Non-empty trimmed input replaces the title and bumps `updated_at`,
    ///   even when the text is unchanged.
    /// - Empty input discards the edit and keeps the title.
    /// - Edit mode ends either way.
    pub fn commit_edit(&mut self, id: &str, raw_value: &str) -> bool {
        let now = self.clock.now_ms();
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        let was_editing = task.editing;
        task.editing = false;
        match normalize_title(raw_value) {
            Some(title) => {
                task.title = title;
                task.touch(now);
                debug!("event=task_edit module=store status=ok id={id}");
                true
            }
            None => {
                debug!("event=task_edit module=store status=discarded id={id}");
                was_editing
            }
        }
    }

    /// Leaves edit mode without touching the title or timestamps.
    pub fn cancel_edit(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(task) if task.editing => {
                task.editing = false;
                true
            }
            _ => false,
        }
    }

    /// Removes all completed tasks, keeping the relative order of the rest.
    pub fn clear_completed(&mut self) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        let focus_removed = self
            .focus_request
            .as_deref()
            .is_some_and(|focused| self.position(focused).is_none());
        if focus_removed {
            self.focus_request = None;
        }
        debug!("event=task_clear_completed module=store status=ok removed={removed}");
        removed > 0
    }

    /// Takes the pending focus request, if any.
    ///
    /// The rendering layer calls this once per paint; a returned id means that
    /// task's edit field must be focused with its text fully selected.
    pub fn take_focus_request(&mut self) -> Option<TaskId> {
        self.focus_request.take()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
