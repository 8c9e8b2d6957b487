use chrono::{TimeZone, Utc};
use taskpulse_core::{visible_tasks, Category, Filter, Priority, Task, TaskId};

fn task(id: TaskId, priority: Priority, completed: bool, minute: u32) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        category: Category::Work,
        priority,
        deadline: None,
        purpose: String::new(),
        description: String::new(),
        completed,
        created_at: Utc.with_ymd_and_hms(2026, 5, 1, 12, minute, 0).unwrap(),
    }
}

fn ids(view: &[&Task]) -> Vec<TaskId> {
    view.iter().map(|task| task.id).collect()
}

#[test]
fn filter_all_returns_every_task_regardless_of_insertion_order() {
    let a = task(1, Priority::Low, true, 0);
    let b = task(2, Priority::High, false, 1);
    let c = task(3, Priority::Medium, false, 2);

    let forward = [a.clone(), b.clone(), c.clone()];
    let backward = [c, b, a];

    let mut forward_ids = ids(&visible_tasks(&forward, Filter::All));
    let mut backward_ids = ids(&visible_tasks(&backward, Filter::All));
    forward_ids.sort_unstable();
    backward_ids.sort_unstable();

    assert_eq!(forward_ids, [1, 2, 3]);
    assert_eq!(backward_ids, [1, 2, 3]);
}

#[test]
fn active_and_completed_filters_split_by_completion_state() {
    let tasks = [
        task(1, Priority::High, false, 0),
        task(2, Priority::High, true, 1),
        task(3, Priority::Low, false, 2),
    ];

    assert_eq!(ids(&visible_tasks(&tasks, Filter::Active)), [1, 3]);
    assert_eq!(ids(&visible_tasks(&tasks, Filter::Completed)), [2]);
}

#[test]
fn incomplete_tasks_sort_before_completed_ones() {
    let tasks = [
        task(1, Priority::High, true, 5),
        task(2, Priority::Low, false, 0),
    ];

    // The completed task outranks on priority and recency, but completion
    // state is the most significant key.
    assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), [2, 1]);
}

#[test]
fn priority_outranks_recency() {
    let high_old = task(1, Priority::High, false, 0);
    let medium_new = task(2, Priority::Medium, false, 30);

    let forward = [high_old.clone(), medium_new.clone()];
    let backward = [medium_new, high_old];

    assert_eq!(ids(&visible_tasks(&forward, Filter::All)), [1, 2]);
    assert_eq!(ids(&visible_tasks(&backward, Filter::All)), [1, 2]);
}

#[test]
fn newer_tasks_sort_first_within_equal_priority() {
    let tasks = [
        task(1, Priority::Medium, false, 0),
        task(2, Priority::Medium, false, 10),
        task(3, Priority::Medium, false, 5),
    ];

    assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), [2, 3, 1]);
}

#[test]
fn full_ties_keep_insertion_order() {
    let first = task(1, Priority::Low, false, 7);
    let mut second = task(2, Priority::Low, false, 7);
    second.created_at = first.created_at;

    let tasks = [first, second];
    assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), [1, 2]);
}

#[test]
fn ordering_is_recomputed_per_call() {
    let mut tasks = vec![
        task(1, Priority::Low, false, 0),
        task(2, Priority::High, false, 1),
    ];
    assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), [2, 1]);

    tasks[0].priority = Priority::High;
    tasks[0].created_at = Utc.with_ymd_and_hms(2026, 5, 1, 13, 0, 0).unwrap();
    assert_eq!(ids(&visible_tasks(&tasks, Filter::All)), [1, 2]);
}
