//! Savings goal views
//!
//! Shapes goals into the progress snapshots the dashboard shows: percentage,
//! whether the target is reached, and how long is left.

use chrono::NaiveDate;

use crate::models::SavingsGoal;
use crate::store::DashboardStore;

/// A goal together with its derived progress figures
#[derive(Debug, Clone)]
pub struct GoalProgress {
    /// The goal itself
    pub goal: SavingsGoal,
    /// Floored percentage of the target reached (may exceed 100)
    pub percent: u32,
    /// Whether the target amount has been reached
    pub reached: bool,
    /// Days until the target date (negative when past it)
    pub days_remaining: i64,
}

/// Goal views over the store
pub struct GoalService<'a> {
    store: &'a DashboardStore,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(store: &'a DashboardStore) -> Self {
        Self { store }
    }

    /// Progress snapshots for every goal, nearest target date first
    pub fn progress(&self, today: NaiveDate) -> Vec<GoalProgress> {
        let mut snapshots: Vec<GoalProgress> = self
            .store
            .goals()
            .iter()
            .map(|goal| GoalProgress {
                percent: goal.progress_percent(),
                reached: goal.is_reached(),
                days_remaining: goal.days_remaining(today),
                goal: goal.clone(),
            })
            .collect();

        snapshots.sort_by_key(|s| s.goal.target_date);
        snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::store::DashboardData;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_goals(goals: Vec<SavingsGoal>) -> DashboardStore {
        DashboardStore::from_data(DashboardData {
            goals,
            ..Default::default()
        })
    }

    #[test]
    fn test_progress_figures() {
        let mut goal = SavingsGoal::new("Trip", Money::from_shekels(300), date(2025, 8, 10));
        goal.contribute(Money::from_shekels(100));

        let store = store_with_goals(vec![goal]);
        let service = GoalService::new(&store);

        let snapshots = service.progress(date(2025, 8, 1));
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].percent, 33);
        assert!(!snapshots[0].reached);
        assert_eq!(snapshots[0].days_remaining, 9);
    }

    #[test]
    fn test_progress_sorted_by_target_date() {
        let later = SavingsGoal::new("Later", Money::from_shekels(100), date(2025, 12, 1));
        let sooner = SavingsGoal::new("Sooner", Money::from_shekels(100), date(2025, 7, 1));

        let store = store_with_goals(vec![later, sooner]);
        let service = GoalService::new(&store);

        let snapshots = service.progress(date(2025, 6, 1));
        assert_eq!(snapshots[0].goal.name, "Sooner");
        assert_eq!(snapshots[1].goal.name, "Later");
    }

    #[test]
    fn test_reached_goal() {
        let mut goal = SavingsGoal::new("Headphones", Money::from_shekels(200), date(2025, 8, 1));
        goal.contribute(Money::from_shekels(200));

        let store = store_with_goals(vec![goal]);
        let snapshots = GoalService::new(&store).progress(date(2025, 7, 1));

        assert!(snapshots[0].reached);
        assert_eq!(snapshots[0].percent, 100);
    }

    #[test]
    fn test_empty_goals() {
        let store = store_with_goals(Vec::new());
        assert!(GoalService::new(&store).progress(date(2025, 7, 1)).is_empty());
    }
}
