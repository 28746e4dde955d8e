use std::collections::BTreeMap;

use serde::Serialize;
use tasker_core::responses::{TaskAddResponse, TaskDeleteResponse, TaskListResponse};
use tasker_core::{Category, StoredTask, Task, TaskId};

use crate::cli::OutputFormat;

pub mod table;

/// Values that can be laid out as rows under fixed headers.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self, date_format: &str) -> Vec<Vec<String>>;
}

/// Formats responses for the terminal.
#[derive(Clone, Debug)]
pub struct Renderer {
    pub format: OutputFormat,
    pub date_format: String,
    pub max_width: Option<usize>,
}

impl Renderer {
    /// Build a renderer, sizing tables from `COLUMNS` when it is set.
    #[must_use]
    pub fn new(format: OutputFormat, date_format: impl Into<String>) -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            format,
            date_format: date_format.into(),
            max_width,
        }
    }

    /// Render a response to a string in the configured format.
    pub fn render<T: Serialize + Tabular>(&self, value: &T) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Raw => Ok(serde_json::to_string(value)?),
            OutputFormat::Table => {
                let rows = value.rows(&self.date_format);
                if rows.is_empty() {
                    return Ok(String::from("(no rows)"));
                }
                Ok(table::render_table(
                    &value.headers(),
                    &rows,
                    table::TableOptions {
                        max_width: self.max_width,
                    },
                ))
            }
        }
    }
}

const TASK_HEADERS: [&str; 7] = [
    "category", "id", "kind", "title", "due", "priority", "details",
];

fn task_row(category: Category, id: TaskId, task: &Task, date_format: &str) -> Vec<String> {
    let details = task
        .project_name()
        .or_else(|| task.personal_notes())
        .unwrap_or_default();

    vec![
        category.to_string(),
        id.to_string(),
        task.kind_name().to_string(),
        task.title.clone(),
        task.due_date.format(date_format).to_string(),
        task.priority.to_string(),
        details.to_string(),
    ]
}

impl Tabular for TaskListResponse {
    fn headers(&self) -> Vec<&'static str> {
        TASK_HEADERS.to_vec()
    }

    fn rows(&self, date_format: &str) -> Vec<Vec<String>> {
        self.categories
            .iter()
            .flat_map(|(category, tasks)| {
                tasks.iter().map(move |StoredTask { id, task }| {
                    task_row(*category, *id, task, date_format)
                })
            })
            .collect()
    }
}

impl Tabular for TaskAddResponse {
    fn headers(&self) -> Vec<&'static str> {
        TASK_HEADERS.to_vec()
    }

    fn rows(&self, date_format: &str) -> Vec<Vec<String>> {
        vec![task_row(self.category, self.id, &self.task, date_format)]
    }
}

impl Tabular for TaskDeleteResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["deleted", "title"]
    }

    fn rows(&self, _date_format: &str) -> Vec<Vec<String>> {
        vec![vec![self.id.to_string(), self.deleted.title.clone()]]
    }
}

/// Statistics report, keyed by label.
impl Tabular for BTreeMap<String, u64> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn rows(&self, _date_format: &str) -> Vec<Vec<String>> {
        self.iter()
            .map(|(key, value)| vec![key.clone(), value.to_string()])
            .collect()
    }
}
