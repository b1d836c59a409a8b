//! Dashboard data sources
//!
//! The dashboard never generates its own data: every collection comes from an
//! injected [`DataSource`]. `SeedSource` supplies deterministic starter
//! records; `JsonFileSource` reads a snapshot written by a previous run.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};
use crate::models::{
    CalendarEvent, EventKind, ExpenseEntry, IncomeEntry, IncomeKind, Money, SavingsGoal, Task,
    TaskCategory, TaskPriority, Tip,
};

use super::file_io::read_json_required;

/// Everything a dashboard view works with, bundled for loading and snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub incomes: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

/// A collaborator that supplies dashboard data
pub trait DataSource {
    /// Load a full set of dashboard collections
    fn load(&self) -> DashResult<DashboardData>;

    /// Human-readable description of where the data came from
    fn describe(&self) -> String;
}

/// Deterministic built-in starter data
///
/// Stands in for an external data feed: the records are fixed so every load
/// produces the same dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

impl SeedSource {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }
}

impl DataSource for SeedSource {
    fn load(&self) -> DashResult<DashboardData> {
        let tasks = vec![
            Task::new(
                "Payment to the Cohen family",
                Self::date(2025, 5, 20),
                TaskCategory::Financial,
                TaskPriority::High,
            ),
            Task::new(
                "Complete income tax form",
                Self::date(2025, 5, 25),
                TaskCategory::Financial,
                TaskPriority::Medium,
            ),
            Task::new(
                "Job interview - Cafe Bona",
                Self::date(2025, 5, 18),
                TaskCategory::Job,
                TaskPriority::High,
            ),
        ];

        let events = vec![
            CalendarEvent::new(Self::date(2025, 5, 15), "Salary payment", EventKind::Income),
            CalendarEvent::new(
                Self::date(2025, 5, 20),
                "Music lesson payment",
                EventKind::Expense,
            ),
            CalendarEvent::new(Self::date(2025, 5, 25), "Job interview", EventKind::Job),
        ];

        let mut bicycle = SavingsGoal::new(
            "New bicycle",
            Money::from_shekels(1200),
            Self::date(2025, 9, 1),
        );
        bicycle.contribute(Money::from_shekels(450));

        let mut trip = SavingsGoal::new(
            "Summer trip",
            Money::from_shekels(800),
            Self::date(2025, 7, 15),
        );
        trip.contribute(Money::from_shekels(800));

        let goals = vec![bicycle, trip];

        // A trailing ledger so the monthly summary has history to chart
        let mut incomes = Vec::new();
        let mut expenses = Vec::new();
        for (i, month) in (1..=5).enumerate() {
            incomes.push(IncomeEntry::new(
                Self::date(2025, month, 1),
                "Allowance",
                Money::from_shekels(300),
                IncomeKind::Permanent,
            ));
            incomes.push(IncomeEntry::new(
                Self::date(2025, month, 12),
                "Babysitting",
                Money::from_shekels(200 + 50 * i as i64),
                IncomeKind::Temporary,
            ));

            expenses.push(ExpenseEntry::new(
                Self::date(2025, month, 8),
                "Food",
                Money::from_shekels(75),
            ));
            expenses.push(ExpenseEntry::new(
                Self::date(2025, month, 15),
                "Entertainment",
                Money::from_shekels(100),
            ));
            expenses.push(ExpenseEntry::new(
                Self::date(2025, month, 20),
                "Transport",
                Money::from_shekels(50),
            ));
        }
        expenses.push(ExpenseEntry::new(
            Self::date(2025, 5, 22),
            "Other",
            Money::from_shekels(20),
        ));

        let tips = vec![
            Tip::new(
                "save-20-percent",
                "Save 20% of every income",
                "The most basic rule of thumb: put aside a fifth of everything \
                 you earn and your savings will grow steadily over time.",
                "saving-basics",
            ),
            Tip::new(
                "refresh-your-resume",
                "Refresh your resume",
                "Adding your latest babysitting experience can improve your \
                 chances with similar jobs.",
                "resume-building",
            ),
            Tip::new(
                "separate-savings-account",
                "Open a separate savings account",
                "Keeping savings in their own account helps the money stay put \
                 and avoids accidental spending.",
                "bank-accounts",
            ),
        ];

        Ok(DashboardData {
            tasks,
            events,
            goals,
            incomes,
            expenses,
            tips,
        })
    }

    fn describe(&self) -> String {
        "built-in starter data".to_string()
    }
}

/// Reads a dashboard snapshot from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> DashResult<DashboardData> {
        read_json_required(&self.path).map_err(|e| match e {
            DashError::Store(msg) => DashError::Store(format!("dashboard snapshot: {}", msg)),
            other => other,
        })
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}
