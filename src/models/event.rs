//! Calendar event model
//!
//! A calendar-anchored record of a financial or job-related occurrence.
//! Events are read-only once created; several events may share a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;

/// The kind of occurrence an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Money coming in (salary, allowance)
    Income,
    /// Money going out (payments)
    Expense,
    /// Job-search events (interviews, shifts)
    Job,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Job => write!(f, "Job"),
        }
    }
}

/// A calendar event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier
    pub id: EventId,

    /// The date the event falls on
    pub date: NaiveDate,

    /// Short description shown on the calendar
    pub title: String,

    /// What kind of occurrence this is
    pub kind: EventKind,
}

impl CalendarEvent {
    /// Create a new event
    pub fn new(date: NaiveDate, title: impl Into<String>, kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            date,
            title: title.into(),
            kind,
        }
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.date, self.kind, self.title)
    }
}
