//! Task list rendering

use chrono::NaiveDate;

use super::format::truncate;
use crate::models::Task;

/// Render a ranked task list for the terminal
pub fn format_task_list(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No active tasks. When you have tasks to do, they will show up here.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<12} {:<34} {:<11} {:<9} {}\n",
        "", "ID", "Task", "Due", "Priority", "Category"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for task in tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let due = format!("{}", task.due_date.format("%Y-%m-%d"));

        output.push_str(&format!(
            "{:<4} {:<12} {:<34} {:<11} {:<9} {}\n",
            mark,
            task.id.to_string(),
            truncate(&task.title, 32),
            due,
            task.priority.to_string(),
            task.category
        ));

        if task.is_overdue(today) {
            let days_late = -task.days_until_due(today);
            output.push_str(&format!(
                "     \x1b[31m! overdue by {} day{}\x1b[0m\n",
                days_late,
                if days_late == 1 { "" } else { "s" }
            ));
        } else if !task.completed {
            let days_left = task.days_until_due(today);
            if days_left == 0 {
                output.push_str("     \x1b[33mdue today\x1b[0m\n");
            } else if days_left <= 3 {
                output.push_str(&format!(
                    "     \x1b[33m{} day{} left\x1b[0m\n",
                    days_left,
                    if days_left == 1 { "" } else { "s" }
                ));
            }
        }
    }

    output
}
