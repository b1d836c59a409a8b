//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store and services.

pub mod calendar;
pub mod goal;
pub mod quick;
pub mod summary;
pub mod task;
pub mod tips;

pub use calendar::{handle_calendar_command, CalendarCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use quick::{handle_quick_command, QuickCommands};
pub use summary::handle_summary_command;
pub use task::{handle_task_command, TaskCommands};
pub use tips::handle_tips_command;

use chrono::NaiveDate;

use crate::error::{DashError, DashResult};
use crate::models::{IncomeKind, TaskCategory, TaskPriority};

/// Parse a "YYYY-MM" month argument
pub fn parse_month(s: &str) -> DashResult<(i32, u32)> {
    let parse = |s: &str| -> Option<(i32, u32)> {
        let (year, month) = s.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    };

    parse(s).ok_or_else(|| DashError::Validation(format!("Invalid month '{}', expected YYYY-MM", s)))
}

/// Parse a "YYYY-MM-DD" date argument
pub fn parse_date(s: &str) -> DashResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DashError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Parse a task category argument
pub fn parse_category(s: &str) -> DashResult<TaskCategory> {
    match s.to_lowercase().as_str() {
        "financial" => Ok(TaskCategory::Financial),
        "job" => Ok(TaskCategory::Job),
        "personal" => Ok(TaskCategory::Personal),
        _ => Err(DashError::Validation(format!(
            "Unknown category '{}', expected financial, job, or personal",
            s
        ))),
    }
}

/// Parse a task priority argument
pub fn parse_priority(s: &str) -> DashResult<TaskPriority> {
    match s.to_lowercase().as_str() {
        "high" => Ok(TaskPriority::High),
        "medium" => Ok(TaskPriority::Medium),
        "low" => Ok(TaskPriority::Low),
        _ => Err(DashError::Validation(format!(
            "Unknown priority '{}', expected high, medium, or low",
            s
        ))),
    }
}

/// Parse an income kind argument
pub fn parse_income_kind(s: &str) -> DashResult<IncomeKind> {
    match s.to_lowercase().as_str() {
        "permanent" => Ok(IncomeKind::Permanent),
        "temporary" => Ok(IncomeKind::Temporary),
        "project" => Ok(IncomeKind::Project),
        _ => Err(DashError::Validation(format!(
            "Unknown income kind '{}', expected permanent, temporary, or project",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-05").unwrap(), (2025, 5));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("2025").is_err());
        assert!(parse_month("may 2025").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-05-20").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
        );
        assert!(parse_date("20/05/2025").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Job").unwrap(), TaskCategory::Job);
        assert_eq!(parse_category("financial").unwrap(), TaskCategory::Financial);
        assert!(parse_category("school").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("HIGH").unwrap(), TaskPriority::High);
        assert!(parse_priority("urgent").is_err());
    }

    #[test]
    fn test_parse_income_kind() {
        assert_eq!(parse_income_kind("project").unwrap(), IncomeKind::Project);
        assert!(parse_income_kind("gig").is_err());
    }
}
