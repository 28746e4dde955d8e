//! Category-keyed task storage.
//!
//! [`SimpleTaskManager`] owns every task, partitioned by [`Category`]. Within
//! a category, tasks keep insertion order until [`SimpleTaskManager::sort_tasks`]
//! reorders them in place; the new order then persists until the next sort or
//! insertion.
//!
//! Every category is registered at construction and the set never changes.
//! Typed callers cannot name an unknown category; string callers go through
//! [`SimpleTaskManager::add_task_named`], which rejects unknown names without
//! touching storage or the task counter.

use std::collections::BTreeMap;

use crate::entities::{StoredTask, Task};
use crate::enums::Category;
use crate::errors::CoreError;
use crate::ids::TaskId;
use crate::statistics::Statistics;

/// Operations every task store provides.
pub trait TaskManager {
    /// Append `task` to `category` and return the id it was assigned.
    fn add_task(&mut self, category: Category, task: Task) -> TaskId;

    /// Replace the task stored under `id`, keeping its category and position.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no stored task has this id.
    fn edit_task(&mut self, id: TaskId, new_task: Task) -> Result<(), CoreError>;

    /// Remove and return the task stored under `id`.
    ///
    /// The task counter is not decremented.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no stored task has this id.
    fn delete_task(&mut self, id: TaskId) -> Result<Task, CoreError>;

    fn statistics(&self) -> Statistics;
}

/// In-memory [`TaskManager`].
#[derive(Debug, Clone)]
pub struct SimpleTaskManager {
    tasks_by_category: BTreeMap<Category, Vec<StoredTask>>,
    task_counter: u64,
}

impl Default for SimpleTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleTaskManager {
    /// Create a manager with every category registered and empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks_by_category: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            task_counter: 0,
        }
    }

    /// Add a task under a category given by name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCategory`] if `category` names no
    /// registered category. Nothing is stored and the counter is unchanged.
    pub fn add_task_named(&mut self, category: &str, task: Task) -> Result<TaskId, CoreError> {
        let category = category.parse::<Category>().inspect_err(|error| {
            tracing::warn!(%error, "rejected task for unknown category");
        })?;
        Ok(self.add_task(category, task))
    }

    /// Tasks matching `predicate`, grouped by category.
    ///
    /// Every category appears in the result, with an empty list when nothing
    /// in it matches. Storage is not modified.
    pub fn filter_tasks<F>(&self, mut predicate: F) -> BTreeMap<Category, Vec<&StoredTask>>
    where
        F: FnMut(&Task) -> bool,
    {
        self.tasks_by_category
            .iter()
            .map(|(category, tasks)| {
                let matching: Vec<&StoredTask> = tasks
                    .iter()
                    .filter(|stored| predicate(&stored.task))
                    .collect();
                (*category, matching)
            })
            .collect()
    }

    /// Sort every category ascending by `key`, in place.
    ///
    /// The sort is stable: tasks with equal keys keep their relative order.
    pub fn sort_tasks<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&Task) -> K,
    {
        for (category, tasks) in &mut self.tasks_by_category {
            tasks.sort_by_key(|stored| key(&stored.task));
            tracing::debug!(%category, len = tasks.len(), "sorted tasks");
        }
    }

    /// Tasks stored under `category`, in current order.
    #[must_use]
    pub fn tasks(&self, category: Category) -> &[StoredTask] {
        self.tasks_by_category
            .get(&category)
            .map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&StoredTask> {
        self.iter().map(|(_, stored)| stored).find(|stored| stored.id == id)
    }

    /// Category the task with `id` is stored under.
    #[must_use]
    pub fn category_of(&self, id: TaskId) -> Option<Category> {
        self.locate(id).map(|(category, _)| category)
    }

    /// Every stored task with its category, in category then position order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &StoredTask)> {
        self.tasks_by_category
            .iter()
            .flat_map(|(category, tasks)| tasks.iter().map(move |stored| (*category, stored)))
    }

    /// Number of tasks currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks_by_category.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks_by_category.values().all(Vec::is_empty)
    }

    /// Number of tasks ever added.
    #[must_use]
    pub const fn total_added(&self) -> u64 {
        self.task_counter
    }

    fn locate(&self, id: TaskId) -> Option<(Category, usize)> {
        self.tasks_by_category.iter().find_map(|(category, tasks)| {
            tasks
                .iter()
                .position(|stored| stored.id == id)
                .map(|index| (*category, index))
        })
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<StoredTask> {
        self.tasks_by_category.entry(category).or_default()
    }
}

impl TaskManager for SimpleTaskManager {
    fn add_task(&mut self, category: Category, task: Task) -> TaskId {
        self.task_counter += 1;
        let id = TaskId(self.task_counter);
        tracing::debug!(%id, %category, title = %task.title, "added task");
        self.slot_mut(category).push(StoredTask { id, task });
        id
    }

    fn edit_task(&mut self, id: TaskId, new_task: Task) -> Result<(), CoreError> {
        let (category, index) = self.locate(id).ok_or(CoreError::NotFound { id })?;
        self.slot_mut(category)[index].task = new_task;
        tracing::debug!(%id, %category, "edited task");
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Task, CoreError> {
        let (category, index) = self.locate(id).ok_or(CoreError::NotFound { id })?;
        let removed = self.slot_mut(category).remove(index);
        tracing::debug!(%id, %category, "deleted task");
        Ok(removed.task)
    }

    fn statistics(&self) -> Statistics {
        Statistics {
            total_tasks: self.task_counter,
            completed_tasks: 0,
            by_category: self
                .tasks_by_category
                .iter()
                .map(|(category, tasks)| (*category, tasks.len()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn titles(tasks: &[StoredTask]) -> Vec<&str> {
        tasks.iter().map(|stored| stored.task.title.as_str()).collect()
    }

    #[test]
    fn new_manager_registers_every_category_empty() {
        let manager = SimpleTaskManager::new();
        for category in Category::ALL {
            assert!(manager.tasks(category).is_empty());
        }
        assert!(manager.is_empty());
        assert_eq!(manager.total_added(), 0);
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut manager = SimpleTaskManager::new();
        let a = manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        let b = manager.add_task(Category::Personal, Task::new("b", "", date(2025, 1, 1), 1));
        assert_eq!(a, TaskId(1));
        assert_eq!(b, TaskId(2));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut manager = SimpleTaskManager::new();
        for title in ["first", "second", "third"] {
            manager.add_task(Category::Work, Task::new(title, "", date(2025, 1, 1), 1));
        }
        assert_eq!(titles(manager.tasks(Category::Work)), ["first", "second", "third"]);
        assert!(manager.tasks(Category::Personal).is_empty());
    }

    #[test]
    fn unknown_category_name_is_rejected_without_counting() {
        let mut manager = SimpleTaskManager::new();
        manager.add_task(Category::Work, Task::new("kept", "", date(2025, 1, 1), 1));

        let err = manager
            .add_task_named("Unknown", Task::new("lost", "", date(2025, 1, 1), 1))
            .unwrap_err();

        assert!(matches!(err, CoreError::UnknownCategory { .. }));
        assert_eq!(manager.total_added(), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn named_add_accepts_registered_category() {
        let mut manager = SimpleTaskManager::new();
        let id = manager
            .add_task_named("personal", Task::new("walk", "", date(2025, 1, 1), 2))
            .unwrap();
        assert_eq!(manager.category_of(id), Some(Category::Personal));
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut manager = SimpleTaskManager::new();
        manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        let id = manager.add_task(Category::Work, Task::new("b", "", date(2025, 1, 1), 1));
        manager.add_task(Category::Work, Task::new("c", "", date(2025, 1, 1), 1));

        manager
            .edit_task(id, Task::new("b2", "edited", date(2025, 6, 1), 4))
            .unwrap();

        assert_eq!(titles(manager.tasks(Category::Work)), ["a", "b2", "c"]);
        let stored = manager.get(id).unwrap();
        assert_eq!(stored.task.description, "edited");
        assert_eq!(manager.total_added(), 3);
    }

    #[test]
    fn edit_missing_id_is_not_found() {
        let mut manager = SimpleTaskManager::new();
        let err = manager
            .edit_task(TaskId(9), Task::new("x", "", date(2025, 1, 1), 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { id } if id == TaskId(9)));
    }

    #[test]
    fn delete_removes_and_keeps_counter() {
        let mut manager = SimpleTaskManager::new();
        let a = manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        manager.add_task(Category::Work, Task::new("b", "", date(2025, 1, 1), 1));

        let removed = manager.delete_task(a).unwrap();

        assert_eq!(removed.title, "a");
        assert_eq!(titles(manager.tasks(Category::Work)), ["b"]);
        assert_eq!(manager.total_added(), 2);
        assert!(manager.get(a).is_none());
        assert!(matches!(
            manager.delete_task(a),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_from_middle_keeps_neighbour_order() {
        let mut manager = SimpleTaskManager::new();
        manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        let b = manager.add_task(Category::Work, Task::new("b", "", date(2025, 1, 1), 1));
        manager.add_task(Category::Work, Task::new("c", "", date(2025, 1, 1), 1));

        manager.delete_task(b).unwrap();

        assert_eq!(titles(manager.tasks(Category::Work)), ["a", "c"]);
        assert_eq!(manager.statistics().total_tasks, 3);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut manager = SimpleTaskManager::new();
        let a = manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        manager.delete_task(a).unwrap();
        let b = manager.add_task(Category::Work, Task::new("b", "", date(2025, 1, 1), 1));
        assert_ne!(a, b);
    }

    #[test]
    fn operations_on_empty_manager_are_safe() {
        let mut manager = SimpleTaskManager::new();
        manager.sort_tasks(|task| task.due_date);
        let filtered = manager.filter_tasks(|_| true);
        assert_eq!(filtered.len(), Category::ALL.len());
        assert!(filtered.values().all(Vec::is_empty));
        assert_eq!(manager.statistics().total_tasks, 0);
    }

    #[test]
    fn statistics_report_counter_and_zero_completed() {
        let mut manager = SimpleTaskManager::new();
        manager.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        manager.add_task(Category::Work, Task::new("b", "", date(2025, 1, 1), 1));
        let c = manager.add_task(Category::Personal, Task::new("c", "", date(2025, 1, 1), 1));
        manager.delete_task(c).unwrap();

        let stats = manager.statistics();
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.by_category[&Category::Work], 2);
        assert_eq!(stats.by_category[&Category::Personal], 0);
    }

    #[test]
    fn trait_object_dispatch_works() {
        let mut manager = SimpleTaskManager::new();
        let dynamic: &mut dyn TaskManager = &mut manager;
        let id = dynamic.add_task(Category::Work, Task::new("a", "", date(2025, 1, 1), 1));
        dynamic.delete_task(id).unwrap();
        assert_eq!(dynamic.statistics().total_tasks, 1);
    }
}
