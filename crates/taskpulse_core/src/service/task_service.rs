//! Task widget facade: mutations, queries, and the delete confirmation flow.
//!
//! # Responsibility
//! - Validate and normalize caller input before store mutations.
//! - Run the two-phase delete state machine.
//! - Answer the presentation layer's view and statistics queries.
//!
//! # Invariants
//! - A rejected mutation leaves the store untouched.
//! - Missing ids are benign no-op outcomes, never errors.
//! - At most one delete is pending at a time; a new request replaces the
//!   previous target silently.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::model::theme::Theme;
use crate::query::view::{visible_tasks, Filter};
use crate::repo::kv_repo::KvRepository;
use crate::stats::progress::{summarize, ProgressSummary};
use crate::store::task_store::TaskStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Result of a completion toggle.
///
/// The two success variants carry the new state so the presentation layer
/// can word its notification without re-reading the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Task is now completed.
    Completed,
    /// Task is now active again.
    Reactivated,
    /// No task with that id; nothing changed.
    NotFound,
}

/// Result of a rename request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Title was replaced and persisted.
    Renamed,
    /// New title equals the current one; nothing changed.
    Unchanged,
    /// No task with that id; nothing changed.
    NotFound,
}

/// Delete confirmation flow state observed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteState {
    /// No delete in flight.
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel removal of this task.
    PendingDelete(TaskId),
}

/// Result of confirming a pending delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Pending task was removed.
    Deleted(TaskId),
    /// Pending task had already disappeared; nothing changed.
    AlreadyGone(TaskId),
    /// No delete was pending.
    NothingPending,
}

/// Synchronous facade over the task store for a single-threaded UI.
///
/// Every operation runs to completion on the calling thread; the caller
/// re-queries [`visible_tasks`](Self::visible_tasks) and
/// [`statistics`](Self::statistics) after each mutation to refresh its view.
pub struct TaskService<R: KvRepository> {
    store: TaskStore<R>,
    delete_state: DeleteState,
}

impl<R: KvRepository> TaskService<R> {
    /// Loads persisted widget state and starts with no delete pending.
    pub fn load(repo: R) -> Self {
        Self {
            store: TaskStore::load(repo),
            delete_state: DeleteState::Idle,
        }
    }

    /// Tasks to display under the active filter, in display order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(self.store.tasks(), self.store.filter())
    }

    /// Aggregate progress snapshot for the stats panel.
    pub fn statistics(&self) -> ProgressSummary {
        summarize(self.store.tasks())
    }

    /// Active display filter.
    pub fn filter(&self) -> Filter {
        self.store.filter()
    }

    /// Selects which completion subset is displayed.
    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
    }

    /// Active theme preference.
    pub fn theme(&self) -> Theme {
        self.store.theme()
    }

    /// Switches the persisted theme preference.
    pub fn set_theme(&mut self, theme: Theme) {
        self.store.set_theme(theme);
    }

    /// Number of tasks regardless of filter.
    pub fn task_count(&self) -> usize {
        self.store.tasks().len()
    }

    /// Looks up one task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.store.find(id)
    }

    /// Validates and adds a new task.
    ///
    /// # Contract
    /// - `title`, `purpose` and `description` are trimmed before storage.
    /// - A title that trims to empty is rejected and the store is untouched.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId, ValidationError> {
        let title = normalize_title(&draft.title)?;
        let id = self.store.add(TaskDraft {
            title,
            category: draft.category,
            priority: draft.priority,
            deadline: draft.deadline,
            purpose: draft.purpose.trim().to_string(),
            description: draft.description.trim().to_string(),
        });
        Ok(id)
    }

    /// Flips a task's completion state.
    pub fn toggle_completion(&mut self, id: TaskId) -> ToggleOutcome {
        match self.store.toggle(id) {
            Some(true) => ToggleOutcome::Completed,
            Some(false) => ToggleOutcome::Reactivated,
            None => ToggleOutcome::NotFound,
        }
    }

    /// Renames a task in place.
    ///
    /// # Contract
    /// - A title that trims to empty is rejected.
    /// - A title equal to the current one is a no-op, not an error.
    pub fn rename_task(
        &mut self,
        id: TaskId,
        new_title: &str,
    ) -> Result<RenameOutcome, ValidationError> {
        let title = normalize_title(new_title)?;

        let Some(task) = self.store.find(id) else {
            return Ok(RenameOutcome::NotFound);
        };
        if task.title == title {
            return Ok(RenameOutcome::Unchanged);
        }

        self.store.rename(id, title);
        Ok(RenameOutcome::Renamed)
    }

    /// Marks a task for deletion, replacing any previously pending target.
    pub fn request_delete(&mut self, id: TaskId) {
        self.delete_state = DeleteState::PendingDelete(id);
    }

    /// Performs the pending removal, if any, and returns to idle.
    pub fn confirm_delete(&mut self) -> DeleteOutcome {
        let outcome = match self.delete_state {
            DeleteState::Idle => DeleteOutcome::NothingPending,
            DeleteState::PendingDelete(id) => {
                if self.store.remove(id) {
                    DeleteOutcome::Deleted(id)
                } else {
                    DeleteOutcome::AlreadyGone(id)
                }
            }
        };
        self.delete_state = DeleteState::Idle;
        outcome
    }

    /// Abandons the pending delete without touching the store.
    pub fn cancel_delete(&mut self) {
        self.delete_state = DeleteState::Idle;
    }

    /// Current delete confirmation state.
    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }
}

fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
