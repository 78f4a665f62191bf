//! The budget document
//!
//! The single aggregate record holding the monthly limit, fixed costs and
//! expenses. It is the only persisted state; totals are never stored in it.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::fixed_cost::FixedCost;
use super::money::Money;

/// Current schema version of the persisted document
pub const DOCUMENT_SCHEMA_VERSION: u32 = 1;

/// The whole persisted budget state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDocument {
    /// Schema version for migration support. Documents written before the
    /// field existed load as version 1.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Spending ceiling for the period
    #[serde(default)]
    pub monthly_limit: Money,

    /// Recurring costs in insertion order
    #[serde(default)]
    pub fixed_costs: Vec<FixedCost>,

    /// Variable expenses, newest first
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

fn default_schema_version() -> u32 {
    DOCUMENT_SCHEMA_VERSION
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self {
            schema_version: DOCUMENT_SCHEMA_VERSION,
            monthly_limit: Money::zero(),
            fixed_costs: Vec::new(),
            expenses: Vec::new(),
        }
    }
}

impl BudgetDocument {
    /// Check whether the document holds no data at all
    pub fn is_empty(&self) -> bool {
        self.monthly_limit.is_zero() && self.fixed_costs.is_empty() && self.expenses.is_empty()
    }

    /// Find every expense whose id matches a user-supplied identifier
    pub fn matching_expenses(&self, identifier: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.id.matches(identifier))
            .collect()
    }

    /// Find every fixed cost whose id matches a user-supplied identifier
    pub fn matching_fixed_costs(&self, identifier: &str) -> Vec<&FixedCost> {
        self.fixed_costs
            .iter()
            .filter(|f| f.id.matches(identifier))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = BudgetDocument::default();
        assert_eq!(doc.schema_version, DOCUMENT_SCHEMA_VERSION);
        assert!(doc.monthly_limit.is_zero());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_camel_case_layout() {
        let mut doc = BudgetDocument::default();
        doc.monthly_limit = Money::from_cents(200000);
        doc.fixed_costs.push(FixedCost::new("Rent", Money::from_cents(100000)));

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["monthlyLimit"], 2000.0);
        assert_eq!(value["fixedCosts"][0]["description"], "Rent");
        assert!(value["expenses"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_loads_document_without_version() {
        let json = r#"{"monthlyLimit": 3500, "fixedCosts": [], "expenses": []}"#;
        let doc: BudgetDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.schema_version, 1);
        assert_eq!(doc.monthly_limit.cents(), 350000);
    }

    #[test]
    fn test_matching_entries() {
        let mut doc = BudgetDocument::default();
        let expense = Expense::new("Lunch", Money::from_cents(2500));
        let short = expense.id.to_string();
        doc.expenses.push(expense);

        assert_eq!(doc.matching_expenses(&short).len(), 1);
        assert!(doc.matching_expenses("exp-zzzzzzzz").is_empty());
        assert!(doc.matching_fixed_costs(&short).is_empty());
    }
}
