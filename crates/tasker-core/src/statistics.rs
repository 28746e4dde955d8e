//! Aggregate counts over the manager's tasks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::Category;

/// Report key for the running count of tasks ever added.
pub const KEY_TOTAL_TASKS: &str = "Total Tasks";
/// Report key for completed tasks.
pub const KEY_COMPLETED_TASKS: &str = "Completed Tasks";

/// Snapshot of task counts.
///
/// `total_tasks` counts every successful add, including tasks deleted since.
/// Tasks have no completion state, so `completed_tasks` is always zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    /// Tasks currently stored, per category.
    pub by_category: BTreeMap<Category, usize>,
}

impl Statistics {
    /// Flatten into the fixed-key report shape.
    ///
    /// Always contains `"Total Tasks"` and `"Completed Tasks"`, followed by a
    /// `"<Category> Tasks"` entry per category.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<String, u64> {
        let mut map = BTreeMap::new();
        map.insert(KEY_TOTAL_TASKS.to_string(), self.total_tasks);
        map.insert(KEY_COMPLETED_TASKS.to_string(), self.completed_tasks);
        for (category, count) in &self.by_category {
            map.insert(
                format!("{category} Tasks"),
                u64::try_from(*count).unwrap_or(u64::MAX),
            );
        }
        map
    }
}
