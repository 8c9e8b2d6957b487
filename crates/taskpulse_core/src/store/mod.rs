//! Task store: canonical list ownership and the persistence round-trip.
//!
//! # Responsibility
//! - Own the full task list plus theme and filter selections.
//! - Keep persisted state in sync after every mutation.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod task_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised while persisting or reading widget state blobs.
#[derive(Debug)]
pub enum StoreError {
    Storage(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "cannot encode widget state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
