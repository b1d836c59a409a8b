//! In-memory store for the dashboard
//!
//! All collections are loaded once from a [`DataSource`] and held in memory
//! for the duration of a command. Operations are synchronous and complete
//! before returning; snapshots are written back explicitly.

pub mod file_io;
pub mod source;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use source::{DashboardData, DataSource, JsonFileSource, SeedSource};

use std::path::Path;

use crate::error::{DashError, DashResult};
use crate::models::{
    CalendarEvent, ExpenseEntry, GoalId, IncomeEntry, Money, SavingsGoal, Task, TaskId, Tip,
};

/// Holds the loaded dashboard collections
pub struct DashboardStore {
    data: DashboardData,
}

impl DashboardStore {
    /// Build a store from already-loaded data
    pub fn from_data(data: DashboardData) -> Self {
        Self { data }
    }

    /// Load a store from a data source
    pub fn load_from(source: &dyn DataSource) -> DashResult<Self> {
        Ok(Self {
            data: source.load()?,
        })
    }

    /// All tasks, in source order
    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    /// All calendar events, in source order
    pub fn events(&self) -> &[CalendarEvent] {
        &self.data.events
    }

    /// All savings goals
    pub fn goals(&self) -> &[SavingsGoal] {
        &self.data.goals
    }

    /// All income entries
    pub fn incomes(&self) -> &[IncomeEntry] {
        &self.data.incomes
    }

    /// All expense entries
    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.data.expenses
    }

    /// All tips
    pub fn tips(&self) -> &[Tip] {
        &self.data.tips
    }

    /// Look up a task by its display form ("tsk-1a2b3c4d") or full UUID
    pub fn find_task(&self, reference: &str) -> Option<&Task> {
        self.data
            .tasks
            .iter()
            .find(|t| t.id.to_string() == reference)
            .or_else(|| {
                let id: TaskId = reference.parse().ok()?;
                self.data.tasks.iter().find(|t| t.id == id)
            })
    }

    /// Look up a goal by its display form ("gol-1a2b3c4d") or full UUID
    pub fn find_goal(&self, reference: &str) -> Option<&SavingsGoal> {
        self.data
            .goals
            .iter()
            .find(|g| g.id.to_string() == reference)
            .or_else(|| {
                let id: GoalId = reference.parse().ok()?;
                self.data.goals.iter().find(|g| g.id == id)
            })
    }

    /// Add a validated task
    pub fn add_task(&mut self, task: Task) -> DashResult<TaskId> {
        task.validate()
            .map_err(|e| DashError::Validation(e.to_string()))?;
        if self.data.tasks.iter().any(|t| t.id == task.id) {
            return Err(DashError::Duplicate {
                entity_type: "Task",
                identifier: task.id.to_string(),
            });
        }
        let id = task.id;
        self.data.tasks.push(task);
        Ok(id)
    }

    /// Mark a task as completed
    pub fn complete_task(&mut self, reference: &str) -> DashResult<TaskId> {
        let id = self
            .find_task(reference)
            .map(|t| t.id)
            .ok_or_else(|| DashError::task_not_found(reference))?;

        for task in &mut self.data.tasks {
            if task.id == id {
                task.complete();
            }
        }
        Ok(id)
    }

    /// Re-open a completed task
    pub fn reopen_task(&mut self, reference: &str) -> DashResult<TaskId> {
        let id = self
            .find_task(reference)
            .map(|t| t.id)
            .ok_or_else(|| DashError::task_not_found(reference))?;

        for task in &mut self.data.tasks {
            if task.id == id {
                task.reopen();
            }
        }
        Ok(id)
    }

    /// Add a validated income entry
    pub fn add_income(&mut self, entry: IncomeEntry) -> DashResult<()> {
        entry
            .validate()
            .map_err(|e| DashError::Validation(e.to_string()))?;
        self.data.incomes.push(entry);
        Ok(())
    }

    /// Add a validated expense entry
    pub fn add_expense(&mut self, entry: ExpenseEntry) -> DashResult<()> {
        entry
            .validate()
            .map_err(|e| DashError::Validation(e.to_string()))?;
        self.data.expenses.push(entry);
        Ok(())
    }

    /// Add a validated savings goal
    pub fn add_goal(&mut self, goal: SavingsGoal) -> DashResult<GoalId> {
        goal.validate()
            .map_err(|e| DashError::Validation(e.to_string()))?;
        let id = goal.id;
        self.data.goals.push(goal);
        Ok(id)
    }

    /// Add a contribution to a goal
    pub fn contribute_to_goal(&mut self, reference: &str, amount: Money) -> DashResult<GoalId> {
        if !amount.is_positive() {
            return Err(DashError::Validation(
                "Contribution must be positive".into(),
            ));
        }

        let id = self
            .find_goal(reference)
            .map(|g| g.id)
            .ok_or_else(|| DashError::goal_not_found(reference))?;

        for goal in &mut self.data.goals {
            if goal.id == id {
                goal.contribute(amount);
            }
        }
        Ok(id)
    }

    /// Borrow the underlying data (for snapshots)
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    /// Write a snapshot of the current state to disk
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> DashResult<()> {
        write_json_atomic(path, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TaskCategory, TaskPriority};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_store() -> DashboardStore {
        DashboardStore::load_from(&SeedSource).unwrap()
    }

    #[test]
    fn test_load_from_seed() {
        let store = seeded_store();
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.events().len(), 3);
        assert!(!store.tips().is_empty());
    }

    #[test]
    fn test_find_task_by_display_form() {
        let store = seeded_store();
        let id = store.tasks()[0].id;

        let found = store.find_task(&id.to_string()).unwrap();
        assert_eq!(found.id, id);

        let found = store.find_task(&id.as_uuid().to_string()).unwrap();
        assert_eq!(found.id, id);

        assert!(store.find_task("tsk-nonsense").is_none());
    }

    #[test]
    fn test_complete_and_reopen_task() {
        let mut store = seeded_store();
        let id = store.tasks()[0].id;
        let reference = id.to_string();

        store.complete_task(&reference).unwrap();
        assert!(store.find_task(&reference).unwrap().completed);

        store.reopen_task(&reference).unwrap();
        assert!(!store.find_task(&reference).unwrap().completed);
    }

    #[test]
    fn test_complete_unknown_task() {
        let mut store = seeded_store();
        let err = store.complete_task("tsk-deadbeef").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_task_rejects_invalid() {
        let mut store = seeded_store();
        let blank = Task::new(
            " ",
            date(2025, 6, 1),
            TaskCategory::Personal,
            TaskPriority::Low,
        );
        assert!(store.add_task(blank).unwrap_err().is_validation());
    }

    #[test]
    fn test_add_task_rejects_duplicate_id() {
        let mut store = seeded_store();
        let existing = store.tasks()[0].clone();
        let err = store.add_task(existing).unwrap_err();
        assert!(matches!(err, DashError::Duplicate { .. }));
    }

    #[test]
    fn test_contribute_to_goal() {
        let mut store = seeded_store();
        let id = store.goals()[0].id;
        let before = store.goals()[0].current_amount;

        store
            .contribute_to_goal(&id.to_string(), Money::from_shekels(50))
            .unwrap();

        assert_eq!(
            store.goals()[0].current_amount,
            before + Money::from_shekels(50)
        );
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let mut store = seeded_store();
        let id = store.goals()[0].id.to_string();

        assert!(store
            .contribute_to_goal(&id, Money::zero())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.json");

        let mut store = seeded_store();
        let id = store.tasks()[0].id.to_string();
        store.complete_task(&id).unwrap();
        store.save_snapshot(&path).unwrap();

        let reloaded = DashboardStore::load_from(&JsonFileSource::new(&path)).unwrap();
        assert!(reloaded.find_task(&id).unwrap().completed);
        assert_eq!(reloaded.tasks().len(), store.tasks().len());
    }
}
