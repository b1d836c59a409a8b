//! Task ranking and filtering
//!
//! Orders tasks the way the dashboard lists them: open tasks first, urgent
//! ones promoted, soonest due date on top. Ranking is stable and never
//! touches the source collection.

use chrono::NaiveDate;

use crate::models::{Task, TaskCategory};
use crate::store::DashboardStore;

/// Produce a ranked copy of the given tasks
///
/// Ordering, in precedence order:
/// 1. incomplete tasks before completed tasks;
/// 2. high-priority tasks before the rest (medium and low are a tie);
/// 3. ascending due date.
///
/// The sort is stable, so tasks that tie on all three keys keep their
/// input order. The input slice is left untouched.
pub fn rank_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by_key(|t| (t.completed, t.priority.tier(), t.due_date));
    ranked
}

/// Options for filtering tasks before ranking
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Filter by life area
    pub category: Option<TaskCategory>,
    /// Include completed tasks (hidden by default)
    pub include_completed: bool,
    /// Only tasks due on or before this date
    pub due_by: Option<NaiveDate>,
    /// Maximum number of tasks to return
    pub limit: Option<usize>,
}

impl TaskFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: TaskCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Include completed tasks
    pub fn with_completed(mut self) -> Self {
        self.include_completed = true;
        self
    }

    /// Only tasks due on or before the given date
    pub fn due_by(mut self, date: NaiveDate) -> Self {
        self.due_by = Some(date);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, task: &Task) -> bool {
        if let Some(category) = self.category {
            if task.category != category {
                return false;
            }
        }
        if !self.include_completed && task.completed {
            return false;
        }
        if let Some(due_by) = self.due_by {
            if task.due_date > due_by {
                return false;
            }
        }
        true
    }
}

/// Read-side task views over the store
pub struct TaskService<'a> {
    store: &'a DashboardStore,
}

impl<'a> TaskService<'a> {
    /// Create a new task service
    pub fn new(store: &'a DashboardStore) -> Self {
        Self { store }
    }

    /// List tasks matching the filter, ranked
    pub fn list(&self, filter: &TaskFilter) -> Vec<Task> {
        let matching: Vec<Task> = self
            .store
            .tasks()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        let mut ranked = rank_tasks(&matching);
        if let Some(limit) = filter.limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Open tasks due within the given number of days, ranked
    pub fn upcoming(&self, today: NaiveDate, days_ahead: i64) -> Vec<Task> {
        let horizon = today + chrono::Duration::days(days_ahead);
        self.list(&TaskFilter::new().due_by(horizon))
    }

    /// Open tasks already past their due date, ranked
    pub fn overdue(&self, today: NaiveDate) -> Vec<Task> {
        let mut tasks = self.list(&TaskFilter::new());
        tasks.retain(|t| t.is_overdue(today));
        tasks
    }
}
