//! Persistence access layer.
//!
//! # Responsibility
//! - Define the keyed-blob contract the store persists through.
//! - Isolate SQL details from store/service orchestration.

pub mod kv_repo;
