//! Task model
//!
//! Represents tracked to-do items with due dates, priorities, and categories.
//! Only the completion flag changes after creation; everything else is fixed
//! when the task is created.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// The life area a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Money-related tasks (payments, forms, bank errands)
    Financial,
    /// Job-search tasks (interviews, applications)
    Job,
    /// Everything else
    #[default]
    Personal,
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Financial => write!(f, "Financial"),
            Self::Job => write!(f, "Job"),
            Self::Personal => write!(f, "Personal"),
        }
    }
}

/// Task priority
///
/// Only `High` is promoted when ordering tasks; `Medium` and `Low` share the
/// same tier. The three levels are kept for labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Ordering tier: high tasks come first, medium and low are a tie
    pub fn tier(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium | Self::Low => 1,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A user-tracked to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Short description of the task
    pub title: String,

    /// When the task is due
    pub due_date: NaiveDate,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Life area the task belongs to
    #[serde(default)]
    pub category: TaskCategory,

    /// Task priority
    #[serde(default)]
    pub priority: TaskPriority,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(
        title: impl Into<String>,
        due_date: NaiveDate,
        category: TaskCategory,
        priority: TaskPriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            due_date,
            completed: false,
            category,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the task as completed
    pub fn complete(&mut self) {
        self.completed = true;
        self.updated_at = Utc::now();
    }

    /// Re-open a completed task
    pub fn reopen(&mut self) {
        self.completed = false;
        self.updated_at = Utc::now();
    }

    /// Check if the task is past its due date and still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    /// Days until the due date (negative when overdue)
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Validate the task
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (due {})", self.title, self.due_date)
    }
}

/// Validation errors for tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title cannot be empty"),
        }
    }
}

impl std::error::Error for TaskValidationError {}
