//! Display formatting for terminal output
//!
//! Provides utilities for formatting the budget for terminal display:
//! the summary dashboard and the entry tables.

pub mod entries;
pub mod format;
pub mod summary;

pub use entries::{format_expense_list, format_fixed_cost_list};
pub use summary::format_summary;
