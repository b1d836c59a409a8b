//! Expense entry model
//!
//! Records money spent, tagged with a free-form category label used by the
//! monthly breakdown.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::income::{EntryStatus, EntryValidationError};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: ExpenseId,

    /// The date the expense was made
    pub date: NaiveDate,

    /// Free-form spending category (e.g. "Food", "Entertainment")
    pub category: String,

    /// The amount spent (stored positive)
    pub amount: Money,

    /// Payment status
    #[serde(default)]
    pub status: EntryStatus,
}

impl ExpenseEntry {
    /// Create a new paid expense entry
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category: category.into(),
            amount,
            status: EntryStatus::Paid,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.category.trim().is_empty() {
            return Err(EntryValidationError::EmptyLabel);
        }
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
