//! Calendar grid rendering

use chrono::{Datelike, NaiveDate};

use crate::services::{CalendarMonth, DayIndicator, DaySlot};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a month grid for the terminal
///
/// Days carrying events are colored by their indicator: job events cyan,
/// expenses red, income green. Today is underlined when it falls in the
/// rendered month.
pub fn format_month(grid: &CalendarMonth, today: NaiveDate) -> String {
    let mut output = String::new();

    let month_name = MONTH_NAMES
        .get(grid.month().saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    output.push_str(&format!("{:^27}\n", format!("{} {}", month_name, grid.year())));
    output.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    for (i, slot) in grid.slots().iter().enumerate() {
        match slot {
            DaySlot::Blank => output.push_str("    "),
            DaySlot::Day(date) => {
                let cell = format!("{:>3}", date.day());
                output.push_str(&paint_day(&cell, grid.indicator(*date), *date == today));
                output.push(' ');
            }
        }

        if (i + 1) % 7 == 0 {
            // Trailing spaces make the rows ragged in terminals
            while output.ends_with(' ') {
                output.pop();
            }
            output.push('\n');
        }
    }
    if !output.ends_with('\n') {
        while output.ends_with(' ') {
            output.pop();
        }
        output.push('\n');
    }

    output.push_str("\njob \x1b[36m■\x1b[0m  expense \x1b[31m■\x1b[0m  income \x1b[32m■\x1b[0m\n");
    output
}

/// Render the events of one day
pub fn format_day_events(grid: &CalendarMonth, date: NaiveDate) -> String {
    let events = grid.events_on(date);
    if events.is_empty() {
        return format!("No events on {}.\n", date.format("%Y-%m-%d"));
    }

    let mut output = format!("Events on {}:\n", date.format("%Y-%m-%d"));
    for event in events {
        output.push_str(&format!("  [{}] {}\n", event.kind, event.title));
    }
    output
}

fn paint_day(cell: &str, indicator: Option<DayIndicator>, is_today: bool) -> String {
    let colored = match indicator {
        Some(DayIndicator::Job) => format!("\x1b[36m{}\x1b[0m", cell),
        Some(DayIndicator::Expense) => format!("\x1b[31m{}\x1b[0m", cell),
        Some(DayIndicator::Income) => format!("\x1b[32m{}\x1b[0m", cell),
        None => cell.to_string(),
    };

    if is_today {
        format!("\x1b[4m{}\x1b[0m", colored)
    } else {
        colored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, EventKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_header_and_weekday_row() {
        let grid = CalendarMonth::build(2025, 5, &[]);
        let text = format_month(&grid, date(2025, 5, 19));

        assert!(text.contains("May 2025"));
        assert!(text.contains(" Su  Mo  Tu  We  Th  Fr  Sa"));
        assert!(text.contains("31"));
    }

    #[test]
    fn test_first_row_is_padded() {
        // May 2025 starts Thursday: the first line of days holds 1-3 only
        let grid = CalendarMonth::build(2025, 5, &[]);
        let text = format_month(&grid, date(2025, 1, 1));

        let first_day_row = text.lines().nth(2).unwrap();
        assert!(first_day_row.contains('1'));
        assert!(first_day_row.contains('3'));
        assert!(!first_day_row.contains('4'));
    }

    #[test]
    fn test_event_day_is_colored() {
        let events = vec![CalendarEvent::new(
            date(2025, 5, 25),
            "Job interview",
            EventKind::Job,
        )];
        let grid = CalendarMonth::build(2025, 5, &events);
        let text = format_month(&grid, date(2025, 1, 1));

        // Cyan escape for the job day
        assert!(text.contains("\x1b[36m 25\x1b[0m"));
    }

    #[test]
    fn test_day_events_listing() {
        let events = vec![
            CalendarEvent::new(date(2025, 5, 20), "Music lesson payment", EventKind::Expense),
            CalendarEvent::new(date(2025, 5, 20), "Extra shift", EventKind::Job),
        ];
        let grid = CalendarMonth::build(2025, 5, &events);

        let text = format_day_events(&grid, date(2025, 5, 20));
        assert!(text.contains("Music lesson payment"));
        assert!(text.contains("Extra shift"));

        let empty = format_day_events(&grid, date(2025, 5, 21));
        assert!(empty.contains("No events"));
    }
}
