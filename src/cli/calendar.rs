//! Calendar commands

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use super::{parse_date, parse_month};
use crate::display::{format_day_events, format_month};
use crate::error::DashResult;
use crate::services::CalendarService;
use crate::store::DashboardStore;

/// Calendar commands
#[derive(Debug, Subcommand)]
pub enum CalendarCommands {
    /// Show the month grid
    Show {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List the events of one day
    Day {
        /// Date to inspect (YYYY-MM-DD)
        date: String,
    },
}

/// Handle a calendar subcommand
pub fn handle_calendar_command(
    store: &DashboardStore,
    command: CalendarCommands,
    today: NaiveDate,
) -> DashResult<()> {
    let service = CalendarService::new(store);

    match command {
        CalendarCommands::Show { month } => {
            let (year, month) = match month {
                Some(spec) => parse_month(&spec)?,
                None => (today.year(), today.month()),
            };

            let grid = service.month(year, month);
            print!("{}", format_month(&grid, today));
        }
        CalendarCommands::Day { date } => {
            let date = parse_date(&date)?;
            let grid = service.month(date.year(), date.month());
            print!("{}", format_day_events(&grid, date));
        }
    }

    Ok(())
}
