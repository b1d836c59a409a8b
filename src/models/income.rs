//! Income entry model
//!
//! Records money earned: the source, the amount, and what kind of work it
//! came from. Entries land in the ledger via the quick-entry flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;

/// What kind of work an income entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    /// Steady job
    Permanent,
    /// One-off or occasional work (babysitting, waiting tables)
    #[default]
    Temporary,
    /// Fixed-scope project work
    Project,
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permanent => write!(f, "Permanent"),
            Self::Temporary => write!(f, "Temporary"),
            Self::Project => write!(f, "Project"),
        }
    }
}

/// Payment status of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Money has changed hands
    #[default]
    Paid,
    /// Expected but not yet settled
    Pending,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A recorded income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Unique identifier
    pub id: IncomeId,

    /// The date the income was received
    pub date: NaiveDate,

    /// Where the money came from
    pub source: String,

    /// The amount received
    pub amount: Money,

    /// What kind of work produced it
    #[serde(default)]
    pub kind: IncomeKind,

    /// Payment status
    #[serde(default)]
    pub status: EntryStatus,
}

impl IncomeEntry {
    /// Create a new paid income entry
    pub fn new(date: NaiveDate, source: impl Into<String>, amount: Money, kind: IncomeKind) -> Self {
        Self {
            id: IncomeId::new(),
            date,
            source: source.into(),
            amount,
            kind,
            status: EntryStatus::Paid,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.source.trim().is_empty() {
            return Err(EntryValidationError::EmptyLabel);
        }
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// Validation errors shared by ledger entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyLabel,
    NonPositiveAmount,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Entry label cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Entry amount must be positive"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_income() {
        let entry = IncomeEntry::new(
            date(2025, 5, 15),
            "Babysitting",
            Money::from_shekels(150),
            IncomeKind::Temporary,
        );

        assert_eq!(entry.source, "Babysitting");
        assert_eq!(entry.amount, Money::from_shekels(150));
        assert_eq!(entry.status, EntryStatus::Paid);
    }

    #[test]
    fn test_validation() {
        let ok = IncomeEntry::new(
            date(2025, 5, 15),
            "Waiting tables",
            Money::from_shekels(200),
            IncomeKind::Temporary,
        );
        assert!(ok.validate().is_ok());

        let unnamed = IncomeEntry::new(
            date(2025, 5, 15),
            "",
            Money::from_shekels(200),
            IncomeKind::Temporary,
        );
        assert_eq!(unnamed.validate(), Err(EntryValidationError::EmptyLabel));

        let zero = IncomeEntry::new(
            date(2025, 5, 15),
            "Babysitting",
            Money::zero(),
            IncomeKind::Temporary,
        );
        assert_eq!(
            zero.validate(),
            Err(EntryValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_serialization() {
        let entry = IncomeEntry::new(
            date(2025, 5, 15),
            "Salary",
            Money::from_shekels(800),
            IncomeKind::Permanent,
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"permanent\""));
        assert!(json.contains("\"paid\""));

        let deserialized: IncomeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry.id, deserialized.id);
        assert_eq!(entry.kind, deserialized.kind);
    }
}
