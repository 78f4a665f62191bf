//! CSV Export functionality
//!
//! Exports fixed costs and expenses to a single spreadsheet-compatible CSV
//! file, one row per entry.

use crate::error::{FinanzaError, FinanzaResult};
use crate::models::BudgetDocument;
use serde::Serialize;
use std::io::Write;

/// Column names, written even when there are no rows
const HEADER: [&str; 6] = ["Kind", "ID", "Date", "Description", "Category", "Amount"];

/// One exported row, fields in `HEADER` order
#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    kind: &'static str,
    id: String,
    date: String,
    description: &'a str,
    category: &'a str,
    amount: String,
}

/// Export all fixed costs, then all expenses, to CSV.
///
/// Fixed costs carry no date or category; those columns are left empty.
pub fn export_entries_csv<W: Write>(doc: &BudgetDocument, writer: W) -> FinanzaResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_error)?;

    for cost in &doc.fixed_costs {
        csv_writer
            .serialize(EntryRow {
                kind: "fixed",
                id: cost.id.as_uuid().to_string(),
                date: String::new(),
                description: &cost.description,
                category: "",
                amount: format!("{:.2}", cost.amount.as_decimal()),
            })
            .map_err(export_error)?;
    }

    for expense in &doc.expenses {
        csv_writer
            .serialize(EntryRow {
                kind: "expense",
                id: expense.id.as_uuid().to_string(),
                date: expense.date.date_naive().to_string(),
                description: &expense.description,
                category: &expense.category,
                amount: format!("{:.2}", expense.amount.as_decimal()),
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanzaError::Export(e.to_string()))?;

    Ok(())
}

fn export_error(e: ::csv::Error) -> FinanzaError {
    FinanzaError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, FixedCost, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_entries_csv() {
        let mut doc = BudgetDocument::default();
        let rent = FixedCost::new("Rent", Money::from_cents(120000));
        let lunch = Expense::recorded_at(
            "Lunch, with team",
            Money::from_cents(3550),
            Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
        );
        doc.fixed_costs.push(rent.clone());
        doc.expenses.push(lunch.clone());

        let mut buffer = Vec::new();
        export_entries_csv(&doc, &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();
        assert_eq!(lines[0], "Kind,ID,Date,Description,Category,Amount");
        assert_eq!(lines[1], format!("fixed,{},,Rent,,1200.00", rent.id.as_uuid()));
        assert_eq!(
            lines[2],
            format!(
                "expense,{},2025-03-14,\"Lunch, with team\",General,35.50",
                lunch.id.as_uuid()
            )
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_document() {
        let mut buffer = Vec::new();
        export_entries_csv(&BudgetDocument::default(), &mut buffer).unwrap();

        let csv_str = String::from_utf8(buffer).unwrap();
        assert_eq!(csv_str, "Kind,ID,Date,Description,Category,Amount\n");
    }
}
