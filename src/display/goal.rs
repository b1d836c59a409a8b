//! Savings goal rendering

use super::format::format_bar;
use crate::services::GoalProgress;

/// Render goal progress snapshots for the terminal
pub fn format_goals(snapshots: &[GoalProgress]) -> String {
    if snapshots.is_empty() {
        return "No goals yet. Add a savings goal to start saving with a plan.\n".to_string();
    }

    let mut output = String::new();
    for snapshot in snapshots {
        output.push_str(&format!(
            "{:<12} {}  {} / {}\n",
            snapshot.goal.id.to_string(),
            snapshot.goal.name,
            snapshot.goal.current_amount,
            snapshot.goal.target_amount
        ));

        output.push_str(&format!(
            "             {} {}\n",
            format_bar(snapshot.percent.min(100) as f64, 100.0, 20),
            if snapshot.reached {
                "goal reached!".to_string()
            } else {
                format!("{}% done", snapshot.percent)
            }
        ));

        if !snapshot.reached {
            if snapshot.days_remaining >= 0 {
                output.push_str(&format!(
                    "             {} days left ({} to go)\n",
                    snapshot.days_remaining,
                    snapshot.goal.remaining()
                ));
            } else {
                output.push_str(&format!(
                    "             target date passed {} days ago ({} to go)\n",
                    -snapshot.days_remaining,
                    snapshot.goal.remaining()
                ));
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoal};
    use crate::services::GoalService;
    use crate::store::{DashboardData, DashboardStore};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_goals_message() {
        let text = format_goals(&[]);
        assert!(text.contains("No goals yet"));
    }

    #[test]
    fn test_progress_rendering() {
        let mut goal = SavingsGoal::new("New bicycle", Money::from_shekels(1200), date(2025, 9, 1));
        goal.contribute(Money::from_shekels(450));

        let store = DashboardStore::from_data(DashboardData {
            goals: vec![goal],
            ..Default::default()
        });
        let snapshots = GoalService::new(&store).progress(date(2025, 5, 19));

        let text = format_goals(&snapshots);
        assert!(text.contains("New bicycle"));
        assert!(text.contains("37% done"));
        assert!(text.contains("₪450.00 / ₪1200.00"));
    }

    #[test]
    fn test_reached_goal_rendering() {
        let mut goal = SavingsGoal::new("Summer trip", Money::from_shekels(800), date(2025, 7, 15));
        goal.contribute(Money::from_shekels(800));

        let store = DashboardStore::from_data(DashboardData {
            goals: vec![goal],
            ..Default::default()
        });
        let snapshots = GoalService::new(&store).progress(date(2025, 5, 19));

        let text = format_goals(&snapshots);
        assert!(text.contains("goal reached!"));
        assert!(!text.contains("days left"));
    }
}
