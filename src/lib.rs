//! teendash - Terminal dashboard for teen personal finance and job tracking
//!
//! This library provides the data layer behind the dashboard: tasks with due
//! dates and priorities, a month calendar of financial and job events,
//! savings goals, an income/expense ledger, and short personalized tips.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (tasks, events, goals, ledger entries)
//! - `store`: Data sources and the in-memory store
//! - `services`: Task ranking, the calendar grid, goal progress
//! - `reports`: Monthly financial summaries
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use teendash::services::{CalendarService, TaskFilter, TaskService};
//! use teendash::store::{DashboardStore, SeedSource};
//!
//! let store = DashboardStore::load_from(&SeedSource)?;
//! let ranked = TaskService::new(&store).list(&TaskFilter::new());
//! let may = CalendarService::new(&store).month(2025, 5);
//! assert_eq!(ranked.len(), 3);
//! assert_eq!(may.day_count(), 31);
//! # Ok::<(), teendash::DashError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{DashError, DashResult};
