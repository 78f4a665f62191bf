//! Budget summary display
//!
//! Formats the dashboard numbers: limit, fixed costs, expenses and what is
//! left for the month.

use crate::services::BudgetSummary;

use super::format::{format_bar, format_percentage, separator};

const WIDTH: usize = 40;
const BAR_WIDTH: usize = 24;

/// Format the budget summary as a dashboard block
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let fixed_note = summary
        .fixed_share()
        .map(|pct| format!("  ({} of limit)", format_percentage(pct)))
        .unwrap_or_default();

    output.push_str(&format!(
        "  {:<16}{:>14}\n",
        "Monthly limit:",
        summary.monthly_limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<16}{:>14}{}\n",
        "Fixed costs:",
        summary.total_fixed.format_with_symbol(symbol),
        fixed_note
    ));
    output.push_str(&format!(
        "  {:<16}{:>14}\n",
        "Expenses:",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<16}{:>14}\n",
        "Remaining:",
        summary.remaining.format_with_symbol(symbol)
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if summary.monthly_limit.is_zero() {
        output.push_str("  No monthly limit set. Use 'finanza limit set <amount>'.\n");
        return output;
    }

    let spent = (summary.total_fixed + summary.total_expenses).as_decimal();
    let limit = summary.monthly_limit.as_decimal();
    output.push_str(&format!(
        "  {} {} spent\n",
        format_bar(spent, limit, BAR_WIDTH),
        format_percentage(spent * 100.0 / limit)
    ));

    if summary.is_overspent() {
        output.push_str(&format!(
            "  Over budget by {}\n",
            summary.remaining.abs().format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn summary(limit: i64, fixed: i64, expenses: i64) -> BudgetSummary {
        BudgetSummary {
            monthly_limit: Money::from_cents(limit),
            total_fixed: Money::from_cents(fixed),
            total_expenses: Money::from_cents(expenses),
            remaining: Money::from_cents(limit - fixed - expenses),
        }
    }

    #[test]
    fn test_summary_lines() {
        let output = format_summary(&summary(300000, 120000, 29050), "$");

        assert!(output.contains("Monthly limit:"));
        assert!(output.contains("$3000.00"));
        assert!(output.contains("$1200.00  (40% of limit)"));
        assert!(output.contains("$290.50"));
        assert!(output.contains("$1509.50"));
        assert!(output.contains("50% spent"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_summary_without_limit() {
        let output = format_summary(&summary(0, 0, 0), "$");

        assert!(output.contains("No monthly limit set"));
        assert!(!output.contains("spent"));
        assert!(!output.contains("of limit"));
    }

    #[test]
    fn test_summary_overspent() {
        let output = format_summary(&summary(100000, 80000, 30000), "R$");

        assert!(output.contains("-R$100.00"));
        assert!(output.contains("Over budget by R$100.00"));
        assert!(output.contains("110% spent"));
    }
}
