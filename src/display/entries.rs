//! Expense and fixed cost display formatting
//!
//! Formats the two entry lists for terminal output as tables.

use chrono::format::{Item, StrftimeItems};

use crate::models::{Expense, FixedCost, Money};

use super::format::{truncate, width_of};

const MAX_DESCRIPTION: usize = 40;

/// Used when the configured date format is not a valid strftime string
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// The configured format if chrono can render it, otherwise the fallback
fn usable_date_format(date_format: &str) -> &str {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        tracing::warn!(date_format, "invalid date format in settings, using {}", FALLBACK_DATE_FORMAT);
        FALLBACK_DATE_FORMAT
    } else {
        date_format
    }
}

/// Format variable expenses as a table, newest first
pub fn format_expense_list(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let date_format = usable_date_format(date_format);

    let rows: Vec<[String; 5]> = expenses
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.date.format(date_format).to_string(),
                truncate(&e.description, MAX_DESCRIPTION),
                e.category.clone(),
                e.amount.format_with_symbol(symbol),
            ]
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    render_table(
        ["ID", "Date", "Description", "Category", "Amount"],
        &rows,
        total.format_with_symbol(symbol),
    )
}

/// Format fixed costs as a table, in insertion order
pub fn format_fixed_cost_list(costs: &[FixedCost], symbol: &str) -> String {
    if costs.is_empty() {
        return "No fixed costs recorded.".to_string();
    }

    let rows: Vec<[String; 3]> = costs
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                truncate(&c.description, MAX_DESCRIPTION),
                c.amount.format_with_symbol(symbol),
            ]
        })
        .collect();

    let total: Money = costs.iter().map(|c| c.amount).sum();
    render_table(
        ["ID", "Description", "Amount"],
        &rows,
        total.format_with_symbol(symbol),
    )
}

/// Render rows under a header with a TOTAL line. The last column is
/// right-aligned and holds the amounts.
fn render_table<const N: usize>(header: [&str; N], rows: &[[String; N]], total: String) -> String {
    let mut widths = [0usize; N];
    for (i, title) in header.iter().enumerate() {
        widths[i] = width_of(title);
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(width_of(cell));
        }
    }
    widths[N - 1] = widths[N - 1].max(width_of(&total));

    let mut output = String::new();
    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    output.push_str(&render_row(&header_cells, &widths));
    output.push_str(&render_separator(&widths));

    for row in rows {
        output.push_str(&render_row(row, &widths));
    }

    output.push_str(&render_separator(&widths));

    let mut total_row = vec![String::new(); N];
    total_row[0] = "TOTAL".to_string();
    total_row[N - 1] = total;
    output.push_str(&render_row(&total_row, &widths));

    output
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let last = widths.len() - 1;
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}

fn render_separator(widths: &[usize]) -> String {
    let line: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("{}\n", line.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_expense_list() {
        let expenses = vec![
            Expense::recorded_at(
                "Groceries",
                Money::from_cents(25050),
                Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap(),
            ),
            Expense::recorded_at(
                "Bus",
                Money::from_cents(450),
                Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap(),
            ),
        ];

        let output = format_expense_list(&expenses, "$", "%d/%m/%Y");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].ends_with("Amount"));
        assert!(lines[2].starts_with(&expenses[0].id.to_string()));
        assert!(lines[2].contains("14/03/2025"));
        assert!(lines[2].contains("General"));
        assert!(lines[2].ends_with("$250.50"));
        assert!(lines[3].ends_with("  $4.50"));
        assert!(lines[5].starts_with("TOTAL"));
        assert!(lines[5].ends_with("$255.00"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let expenses = vec![Expense::recorded_at(
            "Lunch",
            Money::from_cents(1200),
            Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
        )];

        for bad in ["%Q", "%", "%Y-%"] {
            let output = format_expense_list(&expenses, "$", bad);
            assert!(output.contains("2025-03-14"), "format {:?}", bad);
        }
    }

    #[test]
    fn test_fixed_cost_list() {
        let costs = vec![
            FixedCost::new("Rent", Money::from_cents(120000)),
            FixedCost::new("Internet", Money::from_cents(9990)),
        ];

        let output = format_fixed_cost_list(&costs, "R$");

        assert!(output.contains("Rent"));
        assert!(output.contains("R$1200.00"));
        assert!(output.contains("R$99.90"));
        assert!(output.lines().last().unwrap().ends_with("R$1299.90"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_expense_list(&[], "$", "%Y-%m-%d"), "No expenses recorded.");
        assert_eq!(format_fixed_cost_list(&[], "$"), "No fixed costs recorded.");
    }
}
