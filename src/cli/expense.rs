//! Expense CLI commands
//!
//! Implements CLI commands for recording and removing variable expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::FinanzaResult;
use crate::services::BudgetService;
use crate::storage::DocumentStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a variable expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. 45.90 or 45,90
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List expenses, newest first
    #[command(alias = "ls")]
    List,
    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (short form or full UUID)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: DocumentStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinanzaResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => match service.add_expense(&description, &amount)? {
            Some(expense) => {
                println!(
                    "Added expense: {} {}",
                    expense.description,
                    expense.amount.format_with_symbol(symbol)
                );
                println!("  ID: {}", expense.id);
            }
            None => {
                println!(
                    "Nothing added: a description and a non-negative amount are required."
                );
            }
        },

        ExpenseCommands::List => {
            let doc = service.document();
            println!(
                "{}",
                format_expense_list(&doc.expenses, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Remove { id } => {
            let Some(target) = service.find_expense(&id)?.map(|e| e.id) else {
                println!("No expense matches '{}'. Nothing removed.", id);
                return Ok(());
            };

            if let Some(removed) = service.remove_expense(target)? {
                println!(
                    "Removed expense: {} {}",
                    removed.description,
                    removed.amount.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}
