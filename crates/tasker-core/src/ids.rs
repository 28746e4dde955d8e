//! Task identifiers.
//!
//! Ids are assigned by the manager from its running task counter, so the
//! first task ever added is `task-1`. Ids are never reused, even after the
//! task they named has been deleted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Display prefix for task ids.
pub const PREFIX_TASK: &str = "task";

/// Stable identifier of a stored task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX_TASK}-{}", self.0)
    }
}

/// Accepts both `task-7` and a bare `7`.
impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(PREFIX_TASK)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(trimmed);

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId(s.to_string()))
    }
}
