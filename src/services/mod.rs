//! Service layer for Finanza
//!
//! Business logic on top of the storage layer: the budget service that owns
//! and mutates the document, and the pure aggregation functions.

pub mod aggregate;
pub mod budget;

pub use aggregate::{remaining, total_expenses, total_fixed, BudgetSummary};
pub use budget::{parse_amount, BudgetService};
