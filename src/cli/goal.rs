//! Savings goal commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::parse_date;
use crate::display::format_goals;
use crate::error::{DashError, DashResult};
use crate::models::{Money, SavingsGoal};
use crate::services::GoalService;
use crate::store::DashboardStore;

/// Savings goal commands
#[derive(Debug, Subcommand)]
pub enum GoalCommands {
    /// List goals with progress, nearest target date first
    List,
    /// Add a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g. 1200 or 1200.50)
        #[arg(short, long)]
        target: String,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        by: String,
    },
    /// Add money toward a goal
    Contribute {
        /// Goal ID (e.g. gol-1a2b3c4d)
        id: String,
        /// Amount to add
        amount: String,
    },
}

/// Handle a goal subcommand; returns true when the store was modified
pub fn handle_goal_command(
    store: &mut DashboardStore,
    command: GoalCommands,
    today: NaiveDate,
) -> DashResult<bool> {
    match command {
        GoalCommands::List => {
            let snapshots = GoalService::new(store).progress(today);
            print!("{}", format_goals(&snapshots));
            Ok(false)
        }
        GoalCommands::Add { name, target, by } => {
            let target =
                Money::parse(&target).map_err(|e| DashError::Validation(e.to_string()))?;
            let goal = SavingsGoal::new(name, target, parse_date(&by)?);
            let id = store.add_goal(goal)?;
            println!("Added goal {}", id);
            Ok(true)
        }
        GoalCommands::Contribute { id, amount } => {
            let amount =
                Money::parse(&amount).map_err(|e| DashError::Validation(e.to_string()))?;
            let id = store.contribute_to_goal(&id, amount)?;

            let goal = store
                .find_goal(&id.to_string())
                .ok_or_else(|| DashError::goal_not_found(id.to_string()))?;
            println!(
                "Added {} to {} ({}% done)",
                amount,
                goal.name,
                goal.progress_percent()
            );
            Ok(true)
        }
    }
}
