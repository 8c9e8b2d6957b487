//! Collaborator-facing services.
//!
//! # Responsibility
//! - Expose the mutation API and query facade the presentation layer drives.
//! - Keep rendering concerns out of the core.

pub mod task_service;
