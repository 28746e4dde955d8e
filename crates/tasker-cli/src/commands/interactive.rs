//! Menu-driven task session.

use std::io::{BufRead, Write};

use anyhow::Context;
use tasker_config::GeneralConfig;
use tasker_core::responses::{TaskAddResponse, TaskDeleteResponse, TaskListResponse};
use tasker_core::{Category, SimpleTaskManager, Task, TaskManager};

use crate::output::Renderer;
use crate::prompt::{Prompt, PromptError};

const MENU: &str = "\
== Tasker ==
1. Add task
2. List tasks
3. Filter tasks by priority
4. Sort tasks by due date
5. Show statistics
6. Edit task
7. Delete task
0. Exit";

/// What the loop does after a menu action.
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    prompt: Prompt<R, W>,
    manager: &'a mut SimpleTaskManager,
    renderer: &'a Renderer,
    general: &'a GeneralConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        prompt: Prompt<R, W>,
        manager: &'a mut SimpleTaskManager,
        renderer: &'a Renderer,
        general: &'a GeneralConfig,
    ) -> Self {
        Self {
            prompt,
            manager,
            renderer,
            general,
        }
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let Some(choice) = self.prompt.line("Select an option")? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            let outcome = match choice.trim() {
                "1" => self.add(),
                "2" => self.list(),
                "3" => self.filter_by_priority(),
                "4" => self.sort_by_due_date(),
                "5" => self.statistics(),
                "6" => self.edit(),
                "7" => self.delete(),
                "0" => return Ok(()),
                other => {
                    self.prompt.say(&format!("Invalid option '{other}'"))?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ActionError::Prompt(PromptError::Exhausted { field, attempts })) => {
                    self.prompt.say(&format!(
                        "Giving up on {field} after {attempts} attempts, back to menu"
                    ))?;
                }
                Err(ActionError::Prompt(PromptError::Io(error))) => {
                    return Err(error).context("failed to talk to the terminal");
                }
                Err(ActionError::Other(error)) => return Err(error),
            }
        }
    }

    #[cfg(test)]
    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }

    fn add(&mut self) -> ActionResult {
        let default = self.general.category()?;
        let Some(category) = self
            .prompt
            .category("Category (Work/Personal)", default)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(task) = self.read_task(category)? else {
            return Ok(Flow::Exit);
        };

        let id = self.manager.add_task(category, task.clone());
        self.show(&TaskAddResponse { id, category, task })
    }

    fn list(&mut self) -> ActionResult {
        let listing = TaskListResponse::from_grouped(self.manager.filter_tasks(|_| true));
        self.show(&listing)
    }

    fn filter_by_priority(&mut self) -> ActionResult {
        let Some(priority) = self.prompt.integer("Priority")? else {
            return Ok(Flow::Exit);
        };
        let matching = TaskListResponse::from_grouped(
            self.manager.filter_tasks(|task| task.priority == priority),
        );
        self.show(&matching)
    }

    fn sort_by_due_date(&mut self) -> ActionResult {
        self.manager.sort_tasks(|task| task.due_date);
        self.list()
    }

    fn statistics(&mut self) -> ActionResult {
        let report = self.manager.statistics().as_map();
        self.show(&report)
    }

    fn edit(&mut self) -> ActionResult {
        let Some(id) = self.prompt.task_id("Task id")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.manager.category_of(id) else {
            self.prompt.say(&format!("Task not found: {id}"))?;
            return Ok(Flow::Continue);
        };
        let Some(task) = self.read_task(category)? else {
            return Ok(Flow::Exit);
        };

        self.manager.edit_task(id, task.clone())?;
        self.show(&TaskAddResponse { id, category, task })
    }

    fn delete(&mut self) -> ActionResult {
        let Some(id) = self.prompt.task_id("Task id")? else {
            return Ok(Flow::Exit);
        };
        match self.manager.delete_task(id) {
            Ok(deleted) => self.show(&TaskDeleteResponse { id, deleted }),
            Err(error) => {
                self.prompt.say(&error.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Read every task field; the kind follows the category.
    fn read_task(&mut self, category: Category) -> Result<Option<Task>, ActionError> {
        let date_format = self.general.date_format.clone();

        let Some(title) = self.prompt.line("Title")? else {
            return Ok(None);
        };
        let Some(description) = self.prompt.line("Description")? else {
            return Ok(None);
        };
        let Some(due_date) = self
            .prompt
            .date(&format!("Due date ({date_format})"), &date_format)?
        else {
            return Ok(None);
        };
        let Some(priority) = self.prompt.integer("Priority")? else {
            return Ok(None);
        };

        let task = match category {
            Category::Work => {
                let Some(project) = self.prompt.line("Project name")? else {
                    return Ok(None);
                };
                Task::work(title, description, due_date, priority, project)
            }
            Category::Personal => {
                let Some(notes) = self.prompt.line("Personal notes")? else {
                    return Ok(None);
                };
                Task::personal(title, description, due_date, priority, notes)
            }
        };
        Ok(Some(task))
    }

    fn show<T>(&mut self, value: &T) -> ActionResult
    where
        T: serde::Serialize + crate::output::Tabular,
    {
        let rendered = self.renderer.render(value)?;
        self.prompt.say(&rendered)?;
        Ok(Flow::Continue)
    }
}

type ActionResult = Result<Flow, ActionError>;

/// Failures inside a single menu action.
#[derive(Debug, thiserror::Error)]
enum ActionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ActionError {
    fn from(error: std::io::Error) -> Self {
        Self::Prompt(PromptError::Io(error))
    }
}

impl From<tasker_core::CoreError> for ActionError {
    fn from(error: tasker_core::CoreError) -> Self {
        Self::Other(error.into())
    }
}

impl From<tasker_config::ConfigError> for ActionError {
    fn from(error: tasker_config::ConfigError) -> Self {
        Self::Other(error.into())
    }
}
