//! Expense model
//!
//! A one-off variable outflow. Expenses are immutable once recorded; the only
//! way to change one is to delete it and add a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Category assigned to every expense recorded by Finanza
pub const DEFAULT_EXPENSE_CATEGORY: &str = "General";

/// A variable expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Free-text category label
    #[serde(default = "default_category")]
    pub category: String,

    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_EXPENSE_CATEGORY.to_string()
}

impl Expense {
    /// Record a new expense stamped with the current time
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self::recorded_at(description, amount, Utc::now())
    }

    /// Record a new expense with an explicit timestamp
    pub fn recorded_at(description: impl Into<String>, amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category: default_category(),
            date,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_entry(&self.description, self.amount)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

/// Validation errors shared by expenses and fixed costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount(amount) => write!(f, "Amount cannot be negative: {}", amount),
            Self::AmountTooLarge(amount) => write!(f, "Amount is too large: {}", amount),
        }
    }
}

impl std::error::Error for EntryValidationError {}

pub(crate) fn validate_entry(description: &str, amount: Money) -> Result<(), EntryValidationError> {
    if description.trim().is_empty() {
        return Err(EntryValidationError::EmptyDescription);
    }
    if amount.is_negative() {
        return Err(EntryValidationError::NegativeAmount(amount));
    }
    if !amount.is_within_limit() {
        return Err(EntryValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_AMOUNT_CENTS;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Groceries", Money::from_cents(15000));
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.category, DEFAULT_EXPENSE_CATEGORY);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty = Expense::new("   ", Money::from_cents(100));
        assert_eq!(empty.validate(), Err(EntryValidationError::EmptyDescription));

        let negative = Expense::new("Refund", Money::from_cents(-100));
        assert!(matches!(
            negative.validate(),
            Err(EntryValidationError::NegativeAmount(_))
        ));

        assert!(Expense::new("Free sample", Money::zero()).validate().is_ok());

        let huge = Expense::new("Yacht", Money::from_cents(MAX_AMOUNT_CENTS + 1));
        assert!(matches!(
            huge.validate(),
            Err(EntryValidationError::AmountTooLarge(_))
        ));
        assert!(Expense::new("Boat", Money::from_cents(MAX_AMOUNT_CENTS))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_reference_layout() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "description": "Mercado",
            "amount": 150.75,
            "category": "Geral",
            "date": "2025-01-15T12:30:00.000Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 15075);
        assert_eq!(expense.category, "Geral");
        assert_eq!(expense.date.to_rfc3339(), "2025-01-15T12:30:00+00:00");
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Coffee", Money::from_cents(450));
        assert_eq!(expense.to_string(), "Coffee ($4.50)");
    }
}
