//! YAML Export functionality
//!
//! Exports the budget document to YAML format for human-readable backup.

use crate::error::{FinanzaError, FinanzaResult};
use crate::export::json::FullExport;
use crate::models::BudgetDocument;
use std::io::Write;

/// Export the document to YAML format
pub fn export_full_yaml<W: Write>(doc: &BudgetDocument, writer: &mut W) -> FinanzaResult<()> {
    let export = FullExport::from_document(doc);
    let export_err = |e: std::io::Error| FinanzaError::Export(e.to_string());

    writeln!(writer, "# Finanza Budget Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Monthly limit, fixed costs and expenses as stored.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanzaError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, FixedCost, Money};

    #[test]
    fn test_yaml_export() {
        let mut doc = BudgetDocument::default();
        doc.monthly_limit = Money::from_cents(150000);
        doc.fixed_costs.push(FixedCost::new("Internet", Money::from_cents(9990)));
        doc.expenses.push(Expense::new("Coffee", Money::from_cents(450)));

        let mut buffer = Vec::new();
        export_full_yaml(&doc, &mut buffer).unwrap();

        let yaml_str = String::from_utf8(buffer).unwrap();
        assert!(yaml_str.starts_with("# Finanza Budget Export"));
        assert!(yaml_str.contains("schema_version"));
        assert!(yaml_str.contains("Internet"));
        assert!(yaml_str.contains("Coffee"));

        let parsed: FullExport = serde_yaml::from_str(&yaml_str).unwrap();
        assert_eq!(parsed.document, doc);
    }
}
