use std::cell::Cell;
use todo_core::{Clock, ItemStore};

#[derive(Default)]
struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    fn at(now: i64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

fn titles<C: Clock>(store: &ItemStore<C>) -> Vec<&str> {
    store.tasks().iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn whitespace_title_is_ignored() {
    let mut store = ItemStore::new();

    assert_eq!(store.add("   "), None);
    assert_eq!(store.add("\t\n"), None);
    assert!(store.is_empty());
}

#[test]
fn add_trims_and_prepends_newest_first() {
    let mut store = ItemStore::new();

    store.add("Buy milk").unwrap();
    store.add("  Call mom ").unwrap();

    assert_eq!(titles(&store), vec!["Call mom", "Buy milk"]);
}

#[test]
fn new_task_defaults() {
    let clock = ManualClock::at(1_700_000_000_000);
    let mut store = ItemStore::with_clock(&clock);

    let id = store.add("write slides").unwrap();
    let task = store.get(&id).unwrap();

    assert!(!task.id.is_empty());
    assert!(!task.completed);
    assert!(!task.editing);
    assert_eq!(task.created_at, 1_700_000_000_000);
    assert_eq!(task.updated_at, task.created_at);
}

#[test]
fn ids_are_unique() {
    let mut store = ItemStore::new();
    let a = store.add("same").unwrap();
    let b = store.add("same").unwrap();
    assert_ne!(a, b);
}

#[test]
fn double_toggle_restores_state_and_strictly_advances_updated_at() {
    let clock = ManualClock::at(1_000);
    let mut store = ItemStore::with_clock(&clock);
    let id = store.add("water plants").unwrap();

    assert!(store.toggle(&id));
    let first = store.get(&id).unwrap().clone();
    assert!(first.completed);
    assert!(first.updated_at > first.created_at);

    // Same millisecond on purpose.
    assert!(store.toggle(&id));
    let second = store.get(&id).unwrap();
    assert!(!second.completed);
    assert!(second.updated_at > first.updated_at);

    clock.advance(50);
    store.toggle(&id);
    assert_eq!(store.get(&id).unwrap().updated_at, 1_050);
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut store = ItemStore::new();
    store.add("keep me").unwrap();
    let before = store.tasks().to_vec();

    assert!(!store.toggle("missing"));
    assert!(!store.delete("missing"));
    assert!(!store.start_edit("missing"));
    assert!(!store.commit_edit("missing", "new"));
    assert!(!store.cancel_edit("missing"));

    assert_eq!(store.tasks(), before.as_slice());
    assert_eq!(store.take_focus_request(), None);
}

#[test]
fn delete_removes_only_target() {
    let mut store = ItemStore::new();
    let a = store.add("a").unwrap();
    store.add("b").unwrap();

    assert!(store.delete(&a));
    assert_eq!(titles(&store), vec!["b"]);
}

#[test]
fn commit_empty_edit_keeps_title() {
    let clock = ManualClock::at(10);
    let mut store = ItemStore::with_clock(&clock);
    let id = store.add("original").unwrap();
    store.start_edit(&id);
    clock.advance(5);

    store.commit_edit(&id, "   ");

    let task = store.get(&id).unwrap();
    assert_eq!(task.title, "original");
    assert_eq!(task.updated_at, 10);
    assert!(!task.editing);
}

#[test]
fn commit_trims_new_title_and_bumps_updated_at() {
    let clock = ManualClock::at(10);
    let mut store = ItemStore::with_clock(&clock);
    let id = store.add("old title").unwrap();
    store.start_edit(&id);
    clock.advance(5);

    assert!(store.commit_edit(&id, "  new title  "));

    let task = store.get(&id).unwrap();
    assert_eq!(task.title, "new title");
    assert_eq!(task.updated_at, 15);
    assert!(!task.editing);
}

#[test]
fn commit_with_same_title_still_bumps_updated_at() {
    let clock = ManualClock::at(10);
    let mut store = ItemStore::with_clock(&clock);
    let id = store.add("same").unwrap();
    store.start_edit(&id);
    clock.advance(5);

    assert!(store.commit_edit(&id, "  same "));

    let task = store.get(&id).unwrap();
    assert_eq!(task.title, "same");
    assert_eq!(task.updated_at, 15);
    assert!(!task.editing);
}

#[test]
fn cancel_edit_leaves_title_and_timestamps() {
    let mut store = ItemStore::new();
    let id = store.add("untouched").unwrap();
    let before = store.get(&id).unwrap().clone();

    store.start_edit(&id);
    assert!(store.get(&id).unwrap().editing);
    assert!(store.cancel_edit(&id));

    assert_eq!(store.get(&id).unwrap(), &before);
}

#[test]
fn start_edit_requests_focus_for_next_paint() {
    let mut store = ItemStore::new();
    let id = store.add("edit me").unwrap();

    store.start_edit(&id);

    assert_eq!(store.editing_id(), Some(id.as_str()));
    assert_eq!(store.take_focus_request(), Some(id));
}

#[test]
fn clear_completed_keeps_incomplete_in_order() {
    let mut store = ItemStore::new();
    let ids: Vec<String> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|title| store.add(title).unwrap())
        .collect();
    store.toggle(&ids[1]);
    store.toggle(&ids[3]);

    assert!(store.clear_completed());

    assert_eq!(titles(&store), vec!["five", "three", "one"]);
    assert!(store.tasks().iter().all(|task| !task.completed));
    assert!(!store.clear_completed());
}
