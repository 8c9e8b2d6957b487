//! Display projection of the task list.
//!
//! # Responsibility
//! - Apply the user-selected completion filter.
//! - Impose the stable multi-key display order.
//!
//! # Invariants
//! - Ordering is recomputed on every call; nothing here mutates or caches
//!   task state.
//! - Ties across all keys keep insertion order (stable sort).

use crate::model::task::Task;
use std::cmp::Ordering;

/// User-selected subset of tasks to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Only tasks not yet completed.
    Active,
    /// Only completed tasks.
    Completed,
}

impl Filter {
    /// Whether the task belongs to this subset.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Returns the tasks to display under `filter`, in display order.
///
/// Display order, most significant key first:
/// 1. incomplete tasks before completed tasks,
/// 2. priority rank descending (high > medium > low),
/// 3. `created_at` descending (newest first).
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    visible.sort_by(|a, b| display_order(a, b));
    visible
}

fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.rank().cmp(&a.priority.rank()))
        .then_with(|| b.created_at.cmp(&a.created_at))
}
