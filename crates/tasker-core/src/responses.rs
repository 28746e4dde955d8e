//! CLI response types returned by `tasker` commands.
//!
//! These structs define the shape of rendered output for adding, listing,
//! and deleting tasks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{StoredTask, Task};
use crate::enums::Category;
use crate::ids::TaskId;

/// Response from adding a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskAddResponse {
    pub id: TaskId,
    pub category: Category,
    pub task: Task,
}

/// Response from listing, filtering, or sorting tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskListResponse {
    pub categories: BTreeMap<Category, Vec<StoredTask>>,
    pub total_results: usize,
}

impl TaskListResponse {
    /// Build a response from borrowed, category-grouped results.
    #[must_use]
    pub fn from_grouped(grouped: BTreeMap<Category, Vec<&StoredTask>>) -> Self {
        let categories: BTreeMap<Category, Vec<StoredTask>> = grouped
            .into_iter()
            .map(|(category, tasks)| (category, tasks.into_iter().cloned().collect()))
            .collect();
        let total_results = categories.values().map(Vec::len).sum();
        Self {
            categories,
            total_results,
        }
    }
}

/// Response from deleting a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDeleteResponse {
    pub id: TaskId,
    pub deleted: Task,
}
