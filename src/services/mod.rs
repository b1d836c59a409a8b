//! Business logic layer
//!
//! View-model shaping over the in-memory store: task ranking, the month
//! calendar grid, and goal progress.

pub mod calendar;
pub mod goal;
pub mod task;

pub use calendar::{CalendarMonth, CalendarService, DayIndicator, DaySlot};
pub use goal::{GoalProgress, GoalService};
pub use task::{rank_tasks, TaskFilter, TaskService};
