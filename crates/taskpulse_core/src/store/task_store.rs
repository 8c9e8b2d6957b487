//! Canonical task list with keyed-blob persistence.
//!
//! # Responsibility
//! - Own the task list in insertion order and assign unique ids.
//! - Round-trip the `tasks` and `theme` blobs through the repository.
//!
//! # Invariants
//! - Insertion order of the backing list is preserved; display ordering is
//!   recomputed per query, never stored.
//! - Every mutation triggers a persist; a failed write leaves in-memory
//!   state authoritative for the session.
//! - Loading never fails: absent or unparseable blobs yield an empty store.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::model::theme::Theme;
use crate::query::view::Filter;
use crate::repo::kv_repo::KvRepository;
use crate::store::StoreResult;
use chrono::Utc;
use log::{info, warn};

/// Blob key holding the serialized task array.
pub const TASKS_KEY: &str = "tasks";
/// Blob key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Owner of the canonical task list and its persistence round-trip.
pub struct TaskStore<R: KvRepository> {
    repo: R,
    tasks: Vec<Task>,
    theme: Theme,
    filter: Filter,
    next_id: TaskId,
}

impl<R: KvRepository> TaskStore<R> {
    /// Loads widget state from the repository.
    ///
    /// # Contract
    /// - An absent or malformed `tasks` blob yields an empty list; the blob
    ///   is discarded wholesale, never salvaged entry by entry.
    /// - An absent or unknown `theme` blob yields the dark default.
    /// - The id counter resumes above the highest persisted id.
    pub fn load(repo: R) -> Self {
        let tasks = load_tasks(&repo);
        let theme = load_theme(&repo);
        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1);

        info!(
            "event=state_load module=store status=ok tasks={} theme={}",
            tasks.len(),
            theme.as_str()
        );

        Self {
            repo,
            tasks,
            theme,
            filter: Filter::All,
            next_id,
        }
    }

    /// Full unfiltered task list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new task built from the draft and persists.
    ///
    /// The task receives a fresh id, `completed = false` and the current
    /// instant as `created_at`. The draft is stored as given; input
    /// normalization is the service layer's concern.
    pub fn add(&mut self, draft: TaskDraft) -> TaskId {
        let id = self.claim_id();
        self.tasks.push(Task {
            id,
            title: draft.title,
            category: draft.category,
            priority: draft.priority,
            deadline: draft.deadline,
            purpose: draft.purpose,
            description: draft.description,
            completed: false,
            created_at: Utc::now(),
        });
        self.persist_after_mutation();
        id
    }

    /// Removes the task with the given id and persists.
    ///
    /// Returns `false` when no task matches; absence is not an error.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist_after_mutation();
        true
    }

    /// Flips a task's completion state and persists.
    ///
    /// Returns the new `completed` value, or `None` when no task matches.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let completed = {
            let task = self.tasks.iter_mut().find(|task| task.id == id)?;
            task.completed = !task.completed;
            task.completed
        };
        self.persist_after_mutation();
        Some(completed)
    }

    /// Replaces a task title in place and persists.
    ///
    /// The caller validates the new title; the store only guarantees the
    /// update reaches the blob. Returns `false` when no task matches.
    pub fn rename(&mut self, id: TaskId, title: String) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task.title = title,
            None => return false,
        }
        self.persist_after_mutation();
        true
    }

    /// Serializes the full task list to the `tasks` blob.
    pub fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.tasks)?;
        self.repo.put(TASKS_KEY, &blob)?;
        Ok(())
    }

    /// Active theme preference.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches the theme and persists the preference immediately.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.repo.put(THEME_KEY, theme.as_str()) {
            warn!("event=theme_persist module=store status=error error={err}");
        }
    }

    /// Active display filter. Session state only; never persisted.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    fn claim_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // In-memory state stays authoritative when a write fails; the session
    // keeps working and only a later reload can lose the delta.
    fn persist_after_mutation(&self) {
        if let Err(err) = self.persist() {
            warn!("event=tasks_persist module=store status=error error={err}");
        }
    }
}

fn load_tasks<R: KvRepository>(repo: &R) -> Vec<Task> {
    let blob = match repo.get(TASKS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=state_load module=store status=error key=tasks error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&blob) {
        Ok(tasks) => tasks,
        Err(err) => {
            // All-or-nothing: a blob that does not parse as a whole counts
            // as no tasks at all.
            warn!("event=state_load module=store status=discarded key=tasks error={err}");
            Vec::new()
        }
    }
}

fn load_theme<R: KvRepository>(repo: &R) -> Theme {
    match repo.get(THEME_KEY) {
        Ok(Some(value)) => Theme::parse_or_default(&value),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("event=state_load module=store status=error key=theme error={err}");
            Theme::default()
        }
    }
}
