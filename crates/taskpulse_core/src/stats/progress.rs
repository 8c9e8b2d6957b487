//! Progress aggregation and deadline classification.
//!
//! # Responsibility
//! - Derive completion percentages overall and per category/priority.
//! - Pick the motivational tier for the current progress level.
//! - Classify task deadlines against a midnight-normalized "today".
//!
//! # Invariants
//! - Every percentage is within 0..=100; an empty input yields 0.
//! - Completed tasks are never flagged overdue or due today.
//! - All functions are pure over the unfiltered task list.

use crate::model::task::{Category, Priority, Task};
use chrono::{Local, NaiveDate};

/// Rounded completion percentage across all tasks; 0 when there are none.
pub fn overall_percentage(tasks: &[Task]) -> u8 {
    percentage(
        tasks.iter().filter(|task| task.completed).count(),
        tasks.len(),
    )
}

/// Completion percentage across tasks in `category`; 0 when none match.
pub fn category_percentage(tasks: &[Task], category: Category) -> u8 {
    subset_percentage(tasks, |task| task.category == category)
}

/// Completion percentage across tasks at `priority`; 0 when none match.
pub fn priority_percentage(tasks: &[Task], priority: Priority) -> u8 {
    subset_percentage(tasks, |task| task.priority == priority)
}

fn subset_percentage(tasks: &[Task], matches: impl Fn(&Task) -> bool) -> u8 {
    let mut total = 0usize;
    let mut completed = 0usize;
    for task in tasks.iter().filter(|task| matches(task)) {
        total += 1;
        if task.completed {
            completed += 1;
        }
    }
    percentage(completed, total)
}

// Half-away-from-zero rounding, the same result the widget always displayed.
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Motivational tier for the current progress level.
///
/// Tiers are evaluated in descending order; exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motivation {
    /// No tasks exist yet.
    GettingStarted,
    /// Every task is completed.
    AllComplete,
    /// Overall progress is at least 75%.
    AlmostThere,
    /// Overall progress is at least 50%.
    Halfway,
    /// Any progress below 50%.
    KeepGoing,
}

impl Motivation {
    /// User-facing message for this tier.
    pub fn message(self) -> &'static str {
        match self {
            Self::GettingStarted => "Add your first task to get started!",
            Self::AllComplete => "Amazing! All tasks completed! 🎉",
            Self::AlmostThere => "Almost there! Keep up the great work!",
            Self::Halfway => "Halfway there! You're making great progress.",
            Self::KeepGoing => "Every step counts. Keep going!",
        }
    }
}

/// Selects the motivational tier from the full task list.
pub fn motivation(tasks: &[Task]) -> Motivation {
    let overall = overall_percentage(tasks);
    if tasks.is_empty() {
        Motivation::GettingStarted
    } else if overall == 100 {
        Motivation::AllComplete
    } else if overall >= 75 {
        Motivation::AlmostThere
    } else if overall >= 50 {
        Motivation::Halfway
    } else {
        Motivation::KeepGoing
    }
}

/// Aggregate progress snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub overall: u8,
    pub per_category: [(Category, u8); 3],
    pub per_priority: [(Priority, u8); 3],
    pub motivation: Motivation,
}

/// Builds the full progress snapshot for the stats panel.
pub fn summarize(tasks: &[Task]) -> ProgressSummary {
    ProgressSummary {
        overall: overall_percentage(tasks),
        per_category: Category::ALL
            .map(|category| (category, category_percentage(tasks, category))),
        per_priority: Priority::ALL
            .map(|priority| (priority, priority_percentage(tasks, priority))),
        motivation: motivation(tasks),
    }
}

/// Date-derived urgency of a task's deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// Deadline has passed and the task is still open.
    Overdue,
    /// Deadline is the current day and the task is still open.
    DueToday,
    /// No deadline, a future deadline, or the task is already completed.
    OnTrack,
}

/// Classifies a task's deadline against `today`.
///
/// Completed tasks are always `OnTrack` regardless of date.
pub fn deadline_status(task: &Task, today: NaiveDate) -> DeadlineStatus {
    if task.completed {
        return DeadlineStatus::OnTrack;
    }
    match task.deadline {
        Some(deadline) if deadline < today => DeadlineStatus::Overdue,
        Some(deadline) if deadline == today => DeadlineStatus::DueToday,
        _ => DeadlineStatus::OnTrack,
    }
}

/// Classifies against the local calendar date.
pub fn deadline_status_today(task: &Task) -> DeadlineStatus {
    deadline_status(task, Local::now().date_naive())
}
