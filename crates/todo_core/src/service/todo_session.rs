//! Task list session: item store + persistence sync + active filter.
//!
//! # Invariants
//! - Every action that changes the collection is followed by one sync.
//! - Filter changes never touch tasks or storage.
//! - No action returns an error to the surface.

use crate::model::clock::{Clock, SystemClock};
use crate::model::task::{Task, TaskId};
use crate::storage::LocalStorage;
use crate::store::item_store::ItemStore;
use crate::sync::persistence::{PersistenceSync, SyncOutcome, DEFAULT_STORAGE_KEY};
use crate::view::projection::{Filter, ViewModel};

/// Use-case entry point for one surface over one storage backend.
///
/// Generic over storage so file, in-memory and test doubles share one code
/// path, mirroring how the store is generic over its clock.
pub struct TodoSession<S: LocalStorage, C: Clock = SystemClock> {
    storage: S,
    store: ItemStore<C>,
    sync: PersistenceSync,
    filter: Filter,
    last_sync: Option<SyncOutcome>,
}

impl<S: LocalStorage> TodoSession<S, SystemClock> {
    /// Opens a session on `DEFAULT_STORAGE_KEY` with the system clock.
    ///
    /// See `open_with` for load semantics.
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, DEFAULT_STORAGE_KEY, SystemClock)
    }
}

impl<S: LocalStorage, C: Clock> TodoSession<S, C> {
    /// Opens a session on `storage_key`, hydrating the store from storage.
    ///
    /// # Invariants
    /// - Never fails: missing, unreadable or malformed data yields an empty
    ///   or partially recovered list, with the cause logged.
    /// - The active filter starts as `Filter::All`.
    /// - Nothing is written until the first mutating action.
    pub fn open_with(storage: S, storage_key: &str, clock: C) -> Self {
        let mut sync = PersistenceSync::new(storage_key);
        let mut store = ItemStore::with_clock(clock);
        store.hydrate(sync.load(&storage));
        Self {
            storage,
            store,
            sync,
            filter: Filter::All,
            last_sync: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn store(&self) -> &ItemStore<C> {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Result of the most recent sync, `None` before the first mutation.
    pub fn last_sync(&self) -> Option<SyncOutcome> {
        self.last_sync
    }

    /// Projects the current tasks through the active filter.
    pub fn view(&self) -> ViewModel<'_> {
        ViewModel::project(self.store.tasks(), self.filter)
    }

    /// Adds a task and persists the collection.
    ///
    /// Returns the new id; the surface clears its input when this is `Some`.
    /// Whitespace-only titles return `None` and write nothing.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let id = self.store.add(title)?;
        self.persist();
        Some(id)
    }

    /// Flips completion; unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if self.store.toggle(id) {
            self.persist();
        }
    }

    pub fn delete(&mut self, id: &str) {
        if self.store.delete(id) {
            self.persist();
        }
    }

    /// Enters edit mode and queues a focus request for the next paint.
    pub fn start_edit(&mut self, id: &str) {
        if self.store.start_edit(id) {
            self.persist();
        }
    }

    /// See `ItemStore::commit_edit`.
    pub fn commit_edit(&mut self, id: &str, raw_value: &str) {
        if self.store.commit_edit(id, raw_value) {
            self.persist();
        }
    }

    pub fn cancel_edit(&mut self, id: &str) {
        if self.store.cancel_edit(id) {
            self.persist();
        }
    }

    pub fn clear_completed(&mut self) {
        if self.store.clear_completed() {
            self.persist();
        }
    }

    /// Changes the view only; tasks and storage are untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// See `ItemStore::take_focus_request`.
    pub fn take_focus_request(&mut self) -> Option<TaskId> {
        self.store.take_focus_request()
    }

    /// Ends the session, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        self.last_sync = Some(self.sync.sync(&mut self.storage, self.store.tasks()));
    }
}
