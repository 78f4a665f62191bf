//! Budget aggregation
//!
//! Pure functions deriving totals from a budget document. Nothing here is
//! cached: every call sums the current members.

use serde::Serialize;

use crate::models::{BudgetDocument, Money};

/// Sum of all fixed costs
pub fn total_fixed(doc: &BudgetDocument) -> Money {
    doc.fixed_costs.iter().map(|fc| fc.amount).sum()
}

/// Sum of all variable expenses
pub fn total_expenses(doc: &BudgetDocument) -> Money {
    doc.expenses.iter().map(|e| e.amount).sum()
}

/// Limit minus fixed costs minus expenses. Negative means overspent.
pub fn remaining(doc: &BudgetDocument) -> Money {
    doc.monthly_limit - total_fixed(doc) - total_expenses(doc)
}

/// The four headline numbers of a budget document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub monthly_limit: Money,
    pub total_fixed: Money,
    pub total_expenses: Money,
    pub remaining: Money,
}

impl BudgetSummary {
    /// Compute the summary of a document
    pub fn from_document(doc: &BudgetDocument) -> Self {
        let total_fixed = total_fixed(doc);
        let total_expenses = total_expenses(doc);
        Self {
            monthly_limit: doc.monthly_limit,
            total_fixed,
            total_expenses,
            remaining: doc.monthly_limit - total_fixed - total_expenses,
        }
    }

    /// Whether spending exceeds the limit
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Fixed costs as a percentage of the monthly limit.
    ///
    /// `None` when no limit is set.
    pub fn fixed_share(&self) -> Option<f64> {
        if self.monthly_limit.cents() <= 0 {
            return None;
        }
        Some(self.total_fixed.cents() as f64 * 100.0 / self.monthly_limit.cents() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, FixedCost};

    fn doc_with(limit: i64, fixed: &[i64], expenses: &[i64]) -> BudgetDocument {
        let mut doc = BudgetDocument::default();
        doc.monthly_limit = Money::from_cents(limit);
        for (i, cents) in fixed.iter().enumerate() {
            doc.fixed_costs
                .push(FixedCost::new(format!("fixed {}", i), Money::from_cents(*cents)));
        }
        for (i, cents) in expenses.iter().enumerate() {
            doc.expenses
                .push(Expense::new(format!("expense {}", i), Money::from_cents(*cents)));
        }
        doc
    }

    #[test]
    fn test_empty_document_sums_to_zero() {
        let doc = BudgetDocument::default();
        assert_eq!(total_fixed(&doc), Money::zero());
        assert_eq!(total_expenses(&doc), Money::zero());
        assert_eq!(remaining(&doc), Money::zero());
    }

    #[test]
    fn test_totals_equal_member_sums() {
        let doc = doc_with(500000, &[100000, 9990, 4500], &[15000, 2575, 1]);

        assert_eq!(total_fixed(&doc).cents(), 114490);
        assert_eq!(total_expenses(&doc).cents(), 17576);
        assert_eq!(remaining(&doc).cents(), 500000 - 114490 - 17576);
    }

    #[test]
    fn test_remaining_can_be_negative() {
        let doc = doc_with(0, &[100000], &[15000]);

        assert_eq!(remaining(&doc).cents(), -115000);
        assert!(BudgetSummary::from_document(&doc).is_overspent());
    }

    #[test]
    fn test_summary_matches_free_functions() {
        let doc = doc_with(200000, &[], &[30000, 45050]);
        let summary = BudgetSummary::from_document(&doc);

        assert_eq!(summary.monthly_limit, doc.monthly_limit);
        assert_eq!(summary.total_fixed, total_fixed(&doc));
        assert_eq!(summary.total_expenses, total_expenses(&doc));
        assert_eq!(summary.remaining, remaining(&doc));
        assert_eq!(summary.remaining.cents(), 124950);
        assert!(!summary.is_overspent());
    }

    #[test]
    fn test_fixed_share() {
        let summary = BudgetSummary::from_document(&doc_with(200000, &[100000, 20000], &[]));
        assert_eq!(summary.fixed_share(), Some(60.0));

        let no_limit = BudgetSummary::from_document(&doc_with(0, &[100000], &[]));
        assert_eq!(no_limit.fixed_share(), None);
    }
}
