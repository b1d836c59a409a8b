//! Monthly financial summary
//!
//! Aggregates the ledger into the figures the dashboard shows for a month:
//! totals, change against the previous month, an expense breakdown by
//! category, and a trailing month-by-month series for trend display.

use std::collections::HashMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::error::{DashError, DashResult};
use crate::models::Money;
use crate::services::calendar::previous_month;
use crate::store::DashboardStore;

/// How many trailing months the summary charts
const TRAILING_MONTHS: usize = 5;

/// Spending in one category for the month
#[derive(Debug, Clone)]
pub struct CategorySpend {
    /// Category label as recorded on the entries
    pub category: String,
    /// Total spent in the category
    pub total: Money,
    /// Number of entries
    pub entry_count: usize,
    /// Percentage of the month's total spending
    pub percentage: f64,
}

/// Income/expense totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotals {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expense: Money,
}

impl MonthTotals {
    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Monthly financial summary report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Report year
    pub year: i32,
    /// Report month (1-12)
    pub month: u32,
    /// Total income in the month
    pub total_income: Money,
    /// Total expenses in the month
    pub total_expense: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Income change vs the previous month, percent (None when there is no base)
    pub income_change: Option<f64>,
    /// Expense change vs the previous month, percent (None when there is no base)
    pub expense_change: Option<f64>,
    /// Expense breakdown by category, largest first
    pub breakdown: Vec<CategorySpend>,
    /// Totals for the trailing months, oldest first (this month last)
    pub trailing: Vec<MonthTotals>,
}

impl MonthlyReport {
    /// Generate the summary for a month
    pub fn generate(store: &DashboardStore, year: i32, month: u32) -> Self {
        let current = totals_for(store, year, month);
        let (prev_year, prev_month) = previous_month(year, month);
        let previous = totals_for(store, prev_year, prev_month);

        // Aggregate this month's expenses by category label
        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        for entry in store.expenses() {
            if in_month(entry.date, year, month) {
                let slot = by_category
                    .entry(entry.category.clone())
                    .or_insert((Money::zero(), 0));
                slot.0 += entry.amount;
                slot.1 += 1;
            }
        }

        let total_expense = current.expense;
        let mut breakdown: Vec<CategorySpend> = by_category
            .into_iter()
            .map(|(category, (total, entry_count))| CategorySpend {
                category,
                total,
                entry_count,
                percentage: if total_expense.is_zero() {
                    0.0
                } else {
                    (total.agorot() as f64 / total_expense.agorot() as f64) * 100.0
                },
            })
            .collect();

        // Largest spending first; equal totals fall back to the label
        breakdown.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        // Trailing series, oldest month first
        let mut trailing = Vec::with_capacity(TRAILING_MONTHS);
        let (mut y, mut m) = (year, month);
        for _ in 0..TRAILING_MONTHS {
            trailing.push(totals_for(store, y, m));
            (y, m) = previous_month(y, m);
        }
        trailing.reverse();

        Self {
            year,
            month,
            total_income: current.income,
            total_expense,
            balance: current.balance(),
            income_change: percent_change(previous.income, current.income),
            expense_change: percent_change(previous.expense, current.expense),
            breakdown,
            trailing,
        }
    }

    /// Month label such as "2025-05"
    pub fn month_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Balances of the trailing months, oldest first (trend line data)
    pub fn balance_trend(&self) -> Vec<Money> {
        self.trailing.iter().map(|t| t.balance()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Financial summary - {}\n", self.month_label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Income:   {:>12}{}\n",
            self.total_income.to_string(),
            format_change(self.income_change)
        ));
        output.push_str(&format!(
            "Expenses: {:>12}{}\n",
            self.total_expense.to_string(),
            format_change(self.expense_change)
        ));
        output.push_str(&format!("Balance:  {:>12}\n", self.balance.to_string()));
        if self.balance.is_positive() {
            output.push_str("Well done! You have a positive balance.\n");
        } else if self.balance.is_negative() {
            output.push_str("Watch your spending this month.\n");
        }

        if !self.breakdown.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>12} {:>7} {:>7}\n",
                "Category", "Amount", "Count", "%"
            ));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            for spend in &self.breakdown {
                output.push_str(&format!(
                    "{:<20} {:>12} {:>7} {:>6.1}%\n",
                    spend.category,
                    spend.total.to_string(),
                    spend.entry_count,
                    spend.percentage
                ));
            }
        }

        output.push('\n');
        output.push_str("Balance trend:\n");
        for totals in &self.trailing {
            output.push_str(&format!(
                "  {:04}-{:02} {:>12}\n",
                totals.year,
                totals.month,
                totals.balance().to_string()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> DashResult<()> {
        writeln!(writer, "Month,Category,Amount,Entry Count,Percentage")
            .map_err(|e| DashError::Export(e.to_string()))?;

        for spend in &self.breakdown {
            writeln!(
                writer,
                "{},{},{:.2},{},{:.2}",
                self.month_label(),
                escape_csv(&spend.category),
                spend.total.agorot() as f64 / 100.0,
                spend.entry_count,
                spend.percentage
            )
            .map_err(|e| DashError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL EXPENSES,{:.2},,100.00",
            self.month_label(),
            self.total_expense.agorot() as f64 / 100.0
        )
        .map_err(|e| DashError::Export(e.to_string()))?;

        writeln!(
            writer,
            "{},TOTAL INCOME,{:.2},,",
            self.month_label(),
            self.total_income.agorot() as f64 / 100.0
        )
        .map_err(|e| DashError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Totals for one month of the ledger
fn totals_for(store: &DashboardStore, year: i32, month: u32) -> MonthTotals {
    let income: Money = store
        .incomes()
        .iter()
        .filter(|e| in_month(e.date, year, month))
        .map(|e| e.amount)
        .sum();

    let expense: Money = store
        .expenses()
        .iter()
        .filter(|e| in_month(e.date, year, month))
        .map(|e| e.amount)
        .sum();

    MonthTotals {
        year,
        month,
        income,
        expense,
    }
}

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Percent change from `previous` to `current`; None when there is no base
fn percent_change(previous: Money, current: Money) -> Option<f64> {
    if previous.is_zero() {
        return None;
    }
    let prev = previous.agorot() as f64;
    Some(((current.agorot() as f64 - prev) / prev) * 100.0)
}

fn format_change(change: Option<f64>) -> String {
    match change {
        Some(pct) => format!("  ({:+.1}% vs last month)", pct),
        None => String::new(),
    }
}

/// Escape a CSV field that may contain commas or quotes
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseEntry, IncomeEntry, IncomeKind};
    use crate::store::{DashboardData, DashboardStore, SeedSource};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_store() -> DashboardStore {
        let incomes = vec![
            IncomeEntry::new(
                date(2025, 4, 5),
                "Allowance",
                Money::from_shekels(400),
                IncomeKind::Permanent,
            ),
            IncomeEntry::new(
                date(2025, 5, 5),
                "Allowance",
                Money::from_shekels(500),
                IncomeKind::Permanent,
            ),
        ];
        let expenses = vec![
            ExpenseEntry::new(date(2025, 5, 8), "Food", Money::from_shekels(75)),
            ExpenseEntry::new(date(2025, 5, 15), "Entertainment", Money::from_shekels(100)),
            ExpenseEntry::new(date(2025, 5, 20), "Food", Money::from_shekels(25)),
            ExpenseEntry::new(date(2025, 4, 10), "Food", Money::from_shekels(50)),
        ];

        DashboardStore::from_data(DashboardData {
            incomes,
            expenses,
            ..Default::default()
        })
    }

    #[test]
    fn test_totals() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);

        assert_eq!(report.total_income, Money::from_shekels(500));
        assert_eq!(report.total_expense, Money::from_shekels(200));
        assert_eq!(report.balance, Money::from_shekels(300));
    }

    #[test]
    fn test_change_vs_previous_month() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);

        // 400 -> 500 = +25%, 50 -> 200 = +300%
        assert_eq!(report.income_change, Some(25.0));
        assert_eq!(report.expense_change, Some(300.0));
    }

    #[test]
    fn test_change_without_base_month() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 4);

        // March has no entries, so there is no base to compare against
        assert_eq!(report.income_change, None);
        assert_eq!(report.expense_change, None);
    }

    #[test]
    fn test_breakdown_sorted_with_percentages() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);

        assert_eq!(report.breakdown.len(), 2);
        assert_eq!(report.breakdown[0].category, "Entertainment");
        assert_eq!(report.breakdown[0].total, Money::from_shekels(100));
        assert_eq!(report.breakdown[0].entry_count, 1);
        assert!((report.breakdown[0].percentage - 50.0).abs() < 1e-9);

        assert_eq!(report.breakdown[1].category, "Food");
        assert_eq!(report.breakdown[1].entry_count, 2);
        assert!((report.breakdown[1].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_series_oldest_first() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);

        assert_eq!(report.trailing.len(), 5);
        assert_eq!(
            (report.trailing[0].year, report.trailing[0].month),
            (2025, 1)
        );
        assert_eq!(
            (report.trailing[4].year, report.trailing[4].month),
            (2025, 5)
        );
        assert_eq!(report.trailing[4].income, Money::from_shekels(500));

        let trend = report.balance_trend();
        assert_eq!(trend.len(), 5);
        assert_eq!(trend[4], Money::from_shekels(300));
    }

    #[test]
    fn test_empty_ledger() {
        let store = DashboardStore::from_data(DashboardData::default());
        let report = MonthlyReport::generate(&store, 2025, 5);

        assert!(report.total_income.is_zero());
        assert!(report.total_expense.is_zero());
        assert!(report.breakdown.is_empty());
        assert_eq!(report.income_change, None);
    }

    #[test]
    fn test_deterministic_over_seed_data() {
        let store = DashboardStore::load_from(&SeedSource).unwrap();

        let a = MonthlyReport::generate(&store, 2025, 5);
        let b = MonthlyReport::generate(&store, 2025, 5);

        assert_eq!(a.total_income, b.total_income);
        assert_eq!(a.total_expense, b.total_expense);
        assert_eq!(a.breakdown.len(), b.breakdown.len());
    }

    #[test]
    fn test_format_terminal() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);
        let text = report.format_terminal();

        assert!(text.contains("Financial summary - 2025-05"));
        assert!(text.contains("Entertainment"));
        assert!(text.contains("Well done!"));
    }

    #[test]
    fn test_export_csv() {
        let report = MonthlyReport::generate(&ledger_store(), 2025, 5);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Month,Category,Amount"));
        assert!(csv.contains("2025-05,Entertainment,100.00,1,50.00"));
        assert!(csv.contains("TOTAL EXPENSES,200.00"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("Food"), "Food");
        assert_eq!(escape_csv("Food, snacks"), "\"Food, snacks\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
