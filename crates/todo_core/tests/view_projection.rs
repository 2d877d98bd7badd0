use std::collections::HashSet;
use todo_core::{completed_count, filtered, remaining_count, Filter, ItemStore, Task, ViewModel};

fn store_with(completed_mask: &[bool]) -> ItemStore {
    let mut store = ItemStore::new();
    let ids: Vec<String> = (0..completed_mask.len())
        .map(|index| store.add(&format!("task {index}")).unwrap())
        .collect();
    for (id, completed) in ids.iter().zip(completed_mask) {
        if *completed {
            store.toggle(id);
        }
    }
    store
}

fn ids(tasks: &[&Task]) -> HashSet<String> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

#[test]
fn counts_always_sum_to_total() {
    let masks: [&[bool]; 5] = [
        &[],
        &[false],
        &[true],
        &[true, false, true, true],
        &[false, false, false],
    ];
    for mask in masks {
        let store = store_with(mask);
        let tasks = store.tasks();
        assert_eq!(
            remaining_count(tasks) + completed_count(tasks),
            tasks.len(),
            "mask {mask:?}"
        );
    }
}

#[test]
fn active_and_completed_partition_all() {
    let store = store_with(&[true, false, false, true, false]);
    let tasks = store.tasks();

    let all = ids(&filtered(tasks, Filter::All));
    let active = ids(&filtered(tasks, Filter::Active));
    let completed = ids(&filtered(tasks, Filter::Completed));

    assert_eq!(all.len(), tasks.len());
    assert!(active.is_disjoint(&completed));
    assert_eq!(&active | &completed, all);
    assert_eq!(active.len(), 3);
    assert_eq!(completed.len(), 2);
}

#[test]
fn filtered_preserves_store_order() {
    let store = store_with(&[false, true, false]);
    let active: Vec<&str> = filtered(store.tasks(), Filter::Active)
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(active, vec!["task 2", "task 0"]);
}

#[test]
fn view_model_hides_clear_completed_without_completed_tasks() {
    let store = store_with(&[false, false]);
    let view = ViewModel::project(store.tasks(), Filter::Completed);

    assert!(view.rows.is_empty());
    assert_eq!(view.total, 2);
    assert_eq!(view.remaining, 2);
    assert!(!view.show_clear_completed());
}
