//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod advice;
pub mod expense;
pub mod export;
pub mod fixed;
pub mod history;
pub mod limit;

pub use advice::handle_advice_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use fixed::{handle_fixed_command, FixedCommands};
pub use history::handle_history_command;
pub use limit::{handle_limit_command, LimitCommands};

use crate::config::Settings;
use crate::display::format_summary;
use crate::services::BudgetService;
use crate::storage::DocumentStore;

/// Print the budget dashboard
pub fn handle_summary_command<S: DocumentStore>(service: &BudgetService<S>, settings: &Settings) {
    print!(
        "{}",
        format_summary(&service.summary(), &settings.currency_symbol)
    );

    let doc = service.document();
    println!(
        "  {} fixed costs, {} expenses recorded",
        doc.fixed_costs.len(),
        doc.expenses.len()
    );
}
