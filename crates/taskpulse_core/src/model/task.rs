//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its enumerated facets.
//! - Own the persisted wire shape: camelCase field names, lowercase enum
//!   values, `deadline` encoded as an empty string when absent.
//!
//! # Invariants
//! - `id` is unique within a store and never reused in a session.
//! - `title` is never empty after construction or any mutation.
//! - `created_at` is immutable and serves as the ordering tie-break key.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stable numeric identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Wide enough to hold the millisecond-timestamp ids found in blobs written
/// by earlier versions of the widget.
pub type TaskId = i64;

/// Life area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Health,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Health];

    /// Wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
        }
    }
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, in display order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort weight: high outranks medium outranks low.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Canonical task record.
///
/// The serde attributes pin the persisted wire contract: blobs written by
/// any prior version of the widget must keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    /// Optional due date; `""` on the wire when absent.
    #[serde(with = "deadline_wire")]
    pub deadline: Option<NaiveDate>,
    /// Free-form "why this matters" annotation; may be empty.
    pub purpose: String,
    /// Longer free-form body; may be empty.
    pub description: String,
    pub completed: bool,
    /// Creation instant, ISO-8601 on the wire.
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a task.
///
/// The store fills in identity, completion state and the creation instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub deadline: Option<NaiveDate>,
    pub purpose: String,
    pub description: String,
}

impl TaskDraft {
    /// Creates a draft with no deadline and empty annotations.
    pub fn new(title: impl Into<String>, category: Category, priority: Priority) -> Self {
        Self {
            title: title.into(),
            category,
            priority,
            deadline: None,
            purpose: String::new(),
            description: String::new(),
        }
    }
}

/// Wire encoding for the optional deadline: `"YYYY-MM-DD"`, or `""` for none.
mod deadline_wire {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
