//! Monthly limit CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FinanzaResult;
use crate::services::{parse_amount, BudgetService};
use crate::storage::DocumentStore;

/// Monthly limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the monthly spending limit
    Set {
        /// Amount, e.g. 2500 or 2500,00
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show the monthly spending limit
    Show,
}

/// Handle a monthly limit command
pub fn handle_limit_command<S: DocumentStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: LimitCommands,
) -> FinanzaResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LimitCommands::Set { value } => {
            if parse_amount(&value).is_none() {
                println!("'{}' is not a valid amount, the limit is cleared.", value);
            }

            let doc = service.set_monthly_limit(&value)?;
            println!("Monthly limit: {}", doc.monthly_limit.format_with_symbol(symbol));
        }

        LimitCommands::Show => {
            let summary = service.summary();
            println!(
                "Monthly limit: {}",
                summary.monthly_limit.format_with_symbol(symbol)
            );
            println!("Remaining:     {}", summary.remaining.format_with_symbol(symbol));
        }
    }

    Ok(())
}
