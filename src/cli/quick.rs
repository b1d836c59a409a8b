//! Quick-entry commands
//!
//! The fast path for recording money as it happens: one line for an income,
//! one line for an expense.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_date, parse_income_kind};
use crate::error::{DashError, DashResult};
use crate::models::{ExpenseEntry, IncomeEntry, Money};
use crate::store::DashboardStore;

/// Quick-entry commands
#[derive(Debug, Subcommand)]
pub enum QuickCommands {
    /// Record an income
    Income {
        /// Where the money came from (e.g. "Babysitting")
        source: String,
        /// Amount received
        amount: String,
        /// Kind of work (permanent, temporary, project)
        #[arg(short, long, default_value = "temporary")]
        kind: String,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Record an expense
    Expense {
        /// Spending category (e.g. "Food")
        category: String,
        /// Amount spent
        amount: String,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a quick-entry subcommand; returns true when the store was modified
pub fn handle_quick_command(
    store: &mut DashboardStore,
    command: QuickCommands,
    today: NaiveDate,
) -> DashResult<bool> {
    match command {
        QuickCommands::Income {
            source,
            amount,
            kind,
            date,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| DashError::Validation(e.to_string()))?;
            let date = match date {
                Some(spec) => parse_date(&spec)?,
                None => today,
            };

            let entry = IncomeEntry::new(date, source, amount, parse_income_kind(&kind)?);
            store.add_income(entry)?;
            println!("Recorded income of {} on {}", amount, date);
            Ok(true)
        }
        QuickCommands::Expense {
            category,
            amount,
            date,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| DashError::Validation(e.to_string()))?;
            let date = match date {
                Some(spec) => parse_date(&spec)?,
                None => today,
            };

            let entry = ExpenseEntry::new(date, category, amount);
            store.add_expense(entry)?;
            println!("Recorded expense of {} on {}", amount, date);
            Ok(true)
        }
    }
}
