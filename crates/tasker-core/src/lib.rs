//! # tasker-core
//!
//! Core types and the in-memory task manager for Tasker.
//!
//! This crate provides the foundational types shared across all Tasker crates:
//! - Task entity model (plain, work, and personal task kinds)
//! - The closed set of task categories
//! - Sequential task identifiers
//! - Cross-cutting error types
//! - The `TaskManager` trait and its in-memory implementation
//! - Statistics aggregation
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod manager;
pub mod responses;
pub mod statistics;

pub use entities::{StoredTask, Task, TaskKind};
pub use enums::Category;
pub use errors::CoreError;
pub use ids::TaskId;
pub use manager::{SimpleTaskManager, TaskManager};
pub use statistics::Statistics;
