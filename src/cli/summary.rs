//! Monthly summary command

use chrono::{Datelike, NaiveDate};

use super::parse_month;
use crate::error::DashResult;
use crate::reports::MonthlyReport;
use crate::store::DashboardStore;

/// Print the monthly financial summary, or export it as CSV
pub fn handle_summary_command(
    store: &DashboardStore,
    month: Option<String>,
    csv: bool,
    today: NaiveDate,
) -> DashResult<()> {
    let (year, month) = match month {
        Some(spec) => parse_month(&spec)?,
        None => (today.year(), today.month()),
    };

    let report = MonthlyReport::generate(store, year, month);

    if csv {
        let mut stdout = std::io::stdout();
        report.export_csv(&mut stdout)?;
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}
