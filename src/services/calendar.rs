//! Month calendar grid
//!
//! Lays a month out as a Sunday-first sequence of day slots, padded with
//! leading blanks so day 1 lands under its weekday column, and answers
//! per-date event queries.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{CalendarEvent, EventKind};
use crate::store::DashboardStore;

/// The month after the given one, rolling over the year boundary
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The month before the given one, rolling over the year boundary
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// One cell of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    /// Padding before day 1 so weekday columns line up
    Blank,
    /// An actual day of the month
    Day(NaiveDate),
}

impl DaySlot {
    /// Get the date if this slot holds one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Blank => None,
            Self::Day(date) => Some(*date),
        }
    }
}

/// Color-coding category for a calendar day
///
/// The variants are ordered by precedence: a day with a job event is marked
/// `Job` no matter what else it holds, then expenses win over income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayIndicator {
    Job,
    Expense,
    Income,
}

/// A month of the calendar with its events
#[derive(Debug, Clone)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    slots: Vec<DaySlot>,
    events: Vec<CalendarEvent>,
}

impl CalendarMonth {
    /// Build the grid for a month
    ///
    /// Weeks start on Sunday: the grid opens with one blank per weekday
    /// preceding day 1, then one slot per day of the month. Events are kept
    /// in the order they were supplied.
    pub fn build(year: i32, month: u32, events: &[CalendarEvent]) -> Self {
        let first = first_of_month(year, month);
        let days = days_in_month(year, month);

        let mut slots = Vec::with_capacity(first.weekday().num_days_from_sunday() as usize + days);
        for _ in 0..first.weekday().num_days_from_sunday() {
            slots.push(DaySlot::Blank);
        }
        for day in 0..days {
            slots.push(DaySlot::Day(first + Duration::days(day as i64)));
        }

        Self {
            year,
            month,
            slots,
            events: events.to_vec(),
        }
    }

    /// The grid's year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The grid's month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The full slot sequence: leading blanks, then the days
    pub fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    /// Number of leading blank slots (0 when the month starts on Sunday)
    pub fn leading_blanks(&self) -> usize {
        self.slots
            .iter()
            .take_while(|s| matches!(s, DaySlot::Blank))
            .count()
    }

    /// Number of day slots
    pub fn day_count(&self) -> usize {
        self.slots.len() - self.leading_blanks()
    }

    /// Whether a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Events on the given date, in the order they were supplied
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Derived color-coding category for a date
    ///
    /// Precedence: job, then expense, then income.
    pub fn indicator(&self, date: NaiveDate) -> Option<DayIndicator> {
        let day_events = self.events_on(date);

        if day_events.iter().any(|e| e.kind == EventKind::Job) {
            Some(DayIndicator::Job)
        } else if day_events.iter().any(|e| e.kind == EventKind::Expense) {
            Some(DayIndicator::Expense)
        } else if day_events.iter().any(|e| e.kind == EventKind::Income) {
            Some(DayIndicator::Income)
        } else {
            None
        }
    }

    /// The (year, month) pair after this one
    pub fn next(&self) -> (i32, u32) {
        next_month(self.year, self.month)
    }

    /// The (year, month) pair before this one
    pub fn prev(&self) -> (i32, u32) {
        previous_month(self.year, self.month)
    }
}

/// First day of the given month
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default())
}

/// Number of days in the given month
fn days_in_month(year: i32, month: u32) -> usize {
    let (next_year, next_month) = next_month(year, month);
    let first = first_of_month(year, month);
    let next_first = first_of_month(next_year, next_month);
    (next_first - first).num_days() as usize
}

/// Calendar views over the store's events
pub struct CalendarService<'a> {
    store: &'a DashboardStore,
}

impl<'a> CalendarService<'a> {
    /// Create a new calendar service
    pub fn new(store: &'a DashboardStore) -> Self {
        Self { store }
    }

    /// Build the grid for a month from the store's events
    pub fn month(&self, year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::build(year, month, self.store.events())
    }
}
