use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::TaskId;

/// Kind-specific payload of a task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Plain,
    Work { project_name: String },
    Personal { personal_notes: String },
}

/// A unit of work to track.
///
/// No validation is applied: empty titles, past due dates, and negative
/// priorities are all accepted. Priority carries no implied direction; it is
/// compared by raw value only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: i32,
    pub kind: TaskKind,
}

impl Task {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: i32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
            kind: TaskKind::Plain,
        }
    }

    #[must_use]
    pub fn work(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: i32,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: TaskKind::Work {
                project_name: project_name.into(),
            },
            ..Self::new(title, description, due_date, priority)
        }
    }

    #[must_use]
    pub fn personal(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: i32,
        personal_notes: impl Into<String>,
    ) -> Self {
        Self {
            kind: TaskKind::Personal {
                personal_notes: personal_notes.into(),
            },
            ..Self::new(title, description, due_date, priority)
        }
    }

    #[must_use]
    pub fn project_name(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Work { project_name } => Some(project_name),
            TaskKind::Plain | TaskKind::Personal { .. } => None,
        }
    }

    #[must_use]
    pub fn personal_notes(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Personal { personal_notes } => Some(personal_notes),
            TaskKind::Plain | TaskKind::Work { .. } => None,
        }
    }

    /// Short label for the task kind, as shown in listings.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            TaskKind::Plain => "task",
            TaskKind::Work { .. } => "work",
            TaskKind::Personal { .. } => "personal",
        }
    }
}

/// A task as held by the manager, tagged with the id it was assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoredTask {
    pub id: TaskId,
    #[serde(flatten)]
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn work_task_exposes_project_only() {
        let task = Task::work("Prepare report", "Quarterly", date(2025, 2, 28), 1, "Q1 Reports");
        assert_eq!(task.project_name(), Some("Q1 Reports"));
        assert_eq!(task.personal_notes(), None);
        assert_eq!(task.kind_name(), "work");
    }

    #[test]
    fn personal_task_exposes_notes_only() {
        let task = Task::personal("Buy groceries", "Weekly", date(2025, 2, 20), 2, "Fresh produce");
        assert_eq!(task.personal_notes(), Some("Fresh produce"));
        assert_eq!(task.project_name(), None);
        assert_eq!(task.kind_name(), "personal");
    }

    #[test]
    fn construction_accepts_degenerate_values() {
        let task = Task::new("", "", date(1970, 1, 1), -5);
        assert!(task.title.is_empty());
        assert_eq!(task.priority, -5);
        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn fields_are_mutable_after_construction() {
        let mut task = Task::new("Draft", "", date(2025, 1, 1), 3);
        task.title = "Final".into();
        task.priority = 1;
        assert_eq!(task.title, "Final");
        assert_eq!(task.priority, 1);
    }

    #[test]
    fn kind_serializes_with_type_tag() {
        let task = Task::work("t", "d", date(2025, 3, 1), 1, "Apollo");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["kind"]["type"], "work");
        assert_eq!(value["kind"]["project_name"], "Apollo");
        assert_eq!(value["due_date"], "2025-03-01");
    }
}
