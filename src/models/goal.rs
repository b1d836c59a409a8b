//! Savings goal model
//!
//! Tracks progress toward a target amount by a target date. Progress is a
//! floored percentage of the target, matching how the dashboard reports it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Name of the goal (e.g. "New bicycle")
    pub name: String,

    /// Amount saved so far
    pub current_amount: Money,

    /// Amount to reach
    pub target_amount: Money,

    /// When the goal should be reached
    pub target_date: NaiveDate,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, target_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            current_amount: Money::zero(),
            target_amount,
            target_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress toward the target as a floored whole percentage
    ///
    /// May exceed 100 when the goal has been overshot. A zero target reports
    /// 100 so an empty goal never divides by zero.
    pub fn progress_percent(&self) -> u32 {
        if self.target_amount.is_zero() {
            return 100;
        }
        let pct = (self.current_amount.agorot() as f64 / self.target_amount.agorot() as f64) * 100.0;
        pct.floor().max(0.0) as u32
    }

    /// Whether the target amount has been reached
    pub fn is_reached(&self) -> bool {
        self.progress_percent() >= 100
    }

    /// Amount still missing (zero once reached)
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Days left until the target date (negative when past it)
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    /// Add a contribution to the goal
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount += amount;
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.target_amount.is_negative() || self.target_amount.is_zero() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeCurrent,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be positive"),
            Self::NegativeCurrent => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
