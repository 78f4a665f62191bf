//! Fixed cost model
//!
//! A recurring monthly obligation of constant amount (rent, subscriptions).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{validate_entry, EntryValidationError};
use super::ids::FixedCostId;
use super::money::Money;

/// A recurring monthly cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCost {
    /// Unique identifier
    pub id: FixedCostId,

    /// What the cost is for
    pub description: String,

    /// Amount due every month
    pub amount: Money,
}

impl FixedCost {
    /// Create a new fixed cost
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: FixedCostId::new(),
            description: description.into(),
            amount,
        }
    }

    /// Validate the fixed cost
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_entry(&self.description, self.amount)
    }
}

impl fmt::Display for FixedCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}
