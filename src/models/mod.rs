//! Core data models for Finanza
//!
//! The budget document and the entries it holds: expenses, fixed costs and
//! the money and id types they are built from.

pub mod document;
pub mod expense;
pub mod fixed_cost;
pub mod ids;
pub mod money;

pub use document::{BudgetDocument, DOCUMENT_SCHEMA_VERSION};
pub use expense::{EntryValidationError, Expense, DEFAULT_EXPENSE_CATEGORY};
pub use fixed_cost::FixedCost;
pub use ids::{ExpenseId, FixedCostId};
pub use money::{Money, MoneyParseError, MAX_AMOUNT_CENTS};
