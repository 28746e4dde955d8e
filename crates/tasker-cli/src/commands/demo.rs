//! Scripted walkthrough of the task manager.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use tasker_core::responses::TaskListResponse;
use tasker_core::{Category, SimpleTaskManager, Task, TaskManager};

use crate::output::Renderer;

fn sample_date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid sample date {year}-{month}-{day}"))
}

/// Add one work and one personal task, then filter, sort, and report.
pub fn run<W: Write>(out: &mut W, renderer: &Renderer) -> anyhow::Result<SimpleTaskManager> {
    let mut manager = SimpleTaskManager::new();

    manager.add_task(
        Category::Work,
        Task::work(
            "Prepare report",
            "Prepare the quarterly report",
            sample_date(2025, 2, 28)?,
            1,
            "Q1 Reports",
        ),
    );
    manager.add_task(
        Category::Personal,
        Task::personal(
            "Buy groceries",
            "Buy groceries for the week",
            sample_date(2025, 2, 20)?,
            2,
            "Need to buy fresh produce",
        ),
    );

    let high_priority =
        TaskListResponse::from_grouped(manager.filter_tasks(|task| task.priority == 1));
    writeln!(out, "High priority tasks:")?;
    writeln!(out, "{}", renderer.render(&high_priority)?)?;

    manager.sort_tasks(|task| task.due_date);
    let sorted = TaskListResponse::from_grouped(manager.filter_tasks(|_| true));
    writeln!(out, "Tasks sorted by due date:")?;
    writeln!(out, "{}", renderer.render(&sorted)?)?;

    writeln!(out, "Statistics:")?;
    writeln!(out, "{}", renderer.render(&manager.statistics().as_map())?)?;

    Ok(manager)
}

#[cfg(test)]
mod tests {
    use tasker_core::{Category, TaskManager};

    use super::run;
    use crate::cli::OutputFormat;
    use crate::output::Renderer;

    #[test]
    fn demo_reports_filter_sort_and_stats() {
        let renderer = Renderer {
            format: OutputFormat::Table,
            date_format: "%Y-%m-%d".into(),
            max_width: None,
        };
        let mut out = Vec::new();

        let manager = run(&mut out, &renderer).expect("demo runs");
        let text = String::from_utf8(out).unwrap();

        let high = text
            .split("Tasks sorted by due date:")
            .next()
            .expect("filter section");
        assert!(high.contains("Prepare report"));
        assert!(!high.contains("Buy groceries"));
        assert!(text.contains("Total Tasks"));

        assert_eq!(manager.statistics().total_tasks, 2);
        assert_eq!(manager.tasks(Category::Work).len(), 1);
        assert_eq!(manager.tasks(Category::Personal).len(), 1);
    }
}
