//! JSON Export functionality
//!
//! Exports the budget document, with its derived totals, to JSON format with
//! schema versioning.

use crate::error::{FinanzaError, FinanzaResult};
use crate::models::BudgetDocument;
use crate::services::BudgetSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full budget export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The budget document as persisted
    pub document: BudgetDocument,

    /// Totals derived from the document at export time
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub fixed_cost_count: usize,
    pub expense_count: usize,

    /// Sum of all fixed costs
    pub total_fixed: f64,

    /// Sum of all variable expenses
    pub total_expenses: f64,

    /// Monthly limit minus everything spent
    pub remaining: f64,

    /// Date of the oldest expense
    pub earliest_expense: Option<String>,

    /// Date of the newest expense
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from a document
    pub fn from_document(doc: &BudgetDocument) -> Self {
        let summary = BudgetSummary::from_document(doc);

        let earliest_expense = doc
            .expenses
            .iter()
            .map(|e| e.date)
            .min()
            .map(|d| d.date_naive().to_string());

        let latest_expense = doc
            .expenses
            .iter()
            .map(|e| e.date)
            .max()
            .map(|d| d.date_naive().to_string());

        let metadata = ExportMetadata {
            fixed_cost_count: doc.fixed_costs.len(),
            expense_count: doc.expenses.len(),
            total_fixed: summary.total_fixed.as_decimal(),
            total_expenses: summary.total_expenses.as_decimal(),
            remaining: summary.remaining.as_decimal(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            document: doc.clone(),
            metadata,
        }
    }
}

/// Export the document to JSON
pub fn export_full_json<W: Write>(
    doc: &BudgetDocument,
    writer: &mut W,
    pretty: bool,
) -> FinanzaResult<()> {
    let export = FullExport::from_document(doc);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanzaError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, FixedCost, Money};
    use chrono::TimeZone;

    fn sample_document() -> BudgetDocument {
        let mut doc = BudgetDocument::default();
        doc.monthly_limit = Money::from_cents(300000);
        doc.fixed_costs.push(FixedCost::new("Rent", Money::from_cents(120000)));
        doc.expenses.push(Expense::recorded_at(
            "Groceries",
            Money::from_cents(25050),
            Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap(),
        ));
        doc.expenses.push(Expense::recorded_at(
            "Bus pass",
            Money::from_cents(4000),
            Utc.with_ymd_and_hms(2025, 3, 2, 8, 30, 0).unwrap(),
        ));
        doc
    }

    #[test]
    fn test_full_export() {
        let export = FullExport::from_document(&sample_document());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.fixed_cost_count, 1);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.total_fixed, 1200.0);
        assert_eq!(export.metadata.total_expenses, 290.5);
        assert_eq!(export.metadata.remaining, 1509.5);
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2025-03-02"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2025-03-14"));
    }

    #[test]
    fn test_json_export_parses_back() {
        let doc = sample_document();
        let mut buffer = Vec::new();
        export_full_json(&doc, &mut buffer, true).unwrap();

        let json_str = String::from_utf8(buffer).unwrap();
        assert!(json_str.contains("\"monthlyLimit\": 3000.0"));
        assert!(json_str.contains("\"Groceries\""));

        let parsed: FullExport = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.document, doc);
    }

    #[test]
    fn test_empty_document_export() {
        let export = FullExport::from_document(&BudgetDocument::default());

        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }
}
