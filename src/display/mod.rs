//! Terminal output formatting

pub mod calendar;
pub mod format;
pub mod goal;
pub mod task;

pub use calendar::{format_day_events, format_month};
pub use goal::format_goals;
pub use task::format_task_list;
