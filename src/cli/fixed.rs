//! Fixed cost CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_fixed_cost_list;
use crate::error::FinanzaResult;
use crate::services::BudgetService;
use crate::storage::DocumentStore;

/// Fixed cost subcommands
#[derive(Subcommand)]
pub enum FixedCommands {
    /// Record a recurring monthly cost
    Add {
        /// Name of the cost, e.g. Rent
        description: String,
        /// Amount, e.g. 1200 or 1.200,00
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List fixed costs
    #[command(alias = "ls")]
    List,
    /// Remove a fixed cost
    #[command(alias = "rm")]
    Remove {
        /// Fixed cost ID (short form or full UUID)
        id: String,
    },
}

/// Handle a fixed cost command
pub fn handle_fixed_command<S: DocumentStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: FixedCommands,
) -> FinanzaResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        FixedCommands::Add {
            description,
            amount,
        } => match service.add_fixed_cost(&description, &amount)? {
            Some(cost) => {
                println!(
                    "Added fixed cost: {} {}",
                    cost.description,
                    cost.amount.format_with_symbol(symbol)
                );
                println!("  ID: {}", cost.id);
            }
            None => {
                println!(
                    "Nothing added: a description and a non-negative amount are required."
                );
            }
        },

        FixedCommands::List => {
            println!(
                "{}",
                format_fixed_cost_list(&service.document().fixed_costs, symbol)
            );
        }

        FixedCommands::Remove { id } => {
            let Some(target) = service.find_fixed_cost(&id)?.map(|c| c.id) else {
                println!("No fixed cost matches '{}'. Nothing removed.", id);
                return Ok(());
            };

            if let Some(removed) = service.remove_fixed_cost(target)? {
                println!(
                    "Removed fixed cost: {} {}",
                    removed.description,
                    removed.amount.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}
