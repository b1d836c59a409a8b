//! Task management commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_category, parse_date, parse_priority};
use crate::display::format_task_list;
use crate::error::DashResult;
use crate::models::Task;
use crate::services::{TaskFilter, TaskService};
use crate::store::DashboardStore;

/// Task management commands
#[derive(Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, most urgent first
    List {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
        /// Filter by category (financial, job, personal)
        #[arg(short, long)]
        category: Option<String>,
        /// Number of tasks to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Category (financial, job, personal)
        #[arg(short, long, default_value = "personal")]
        category: String,
        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: String,
    },
    /// Mark a task as completed
    Done {
        /// Task ID (e.g. tsk-1a2b3c4d)
        id: String,
    },
    /// Re-open a completed task
    Reopen {
        /// Task ID (e.g. tsk-1a2b3c4d)
        id: String,
    },
}

/// Handle a task subcommand; returns true when the store was modified
pub fn handle_task_command(
    store: &mut DashboardStore,
    command: TaskCommands,
    today: NaiveDate,
) -> DashResult<bool> {
    match command {
        TaskCommands::List {
            all,
            category,
            limit,
        } => {
            let mut filter = TaskFilter::new();
            if all {
                filter = filter.with_completed();
            }
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let tasks = TaskService::new(store).list(&filter);
            print!("{}", format_task_list(&tasks, today));
            Ok(false)
        }
        TaskCommands::Add {
            title,
            due,
            category,
            priority,
        } => {
            let task = Task::new(
                title,
                parse_date(&due)?,
                parse_category(&category)?,
                parse_priority(&priority)?,
            );
            let id = store.add_task(task)?;
            println!("Added task {}", id);
            Ok(true)
        }
        TaskCommands::Done { id } => {
            let id = store.complete_task(&id)?;
            println!("Completed task {}", id);
            Ok(true)
        }
        TaskCommands::Reopen { id } => {
            let id = store.reopen_task(&id)?;
            println!("Reopened task {}", id);
            Ok(true)
        }
    }
}
