//! Core domain logic for the TaskPulse widget.
//! This crate is the single source of truth for task state and its derived
//! views; rendering, toasts, and modal plumbing live with the embedding
//! presentation layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Category, Priority, Task, TaskDraft, TaskId};
pub use model::theme::Theme;
pub use query::view::{visible_tasks, Filter};
pub use repo::kv_repo::{KvRepository, SqliteKvRepository};
pub use service::task_service::{
    DeleteOutcome, DeleteState, RenameOutcome, TaskService, ToggleOutcome, ValidationError,
};
pub use stats::progress::{
    category_percentage, deadline_status, deadline_status_today, motivation, overall_percentage,
    priority_percentage, summarize, DeadlineStatus, Motivation, ProgressSummary,
};
pub use store::task_store::TaskStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
