use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finanza::audit::AuditLogger;
use finanza::cli::{
    handle_advice_command, handle_expense_command, handle_export_command, handle_fixed_command,
    handle_history_command, handle_limit_command, handle_summary_command,
};
use finanza::config::{AdviceSettings, FinanzaPaths, Settings};
use finanza::services::BudgetService;
use finanza::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "finanza",
    version,
    about = "Personal monthly budget dashboard for the terminal",
    long_about = "Finanza tracks a monthly spending limit, recurring fixed costs and \
                  variable expenses, shows what is left for the month and can ask an \
                  AI advisor for feedback on your spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget dashboard (default)
    Summary,

    /// Monthly limit commands
    #[command(subcommand)]
    Limit(finanza::cli::LimitCommands),

    /// Variable expense commands
    #[command(subcommand, alias = "exp")]
    Expense(finanza::cli::ExpenseCommands),

    /// Fixed cost commands
    #[command(subcommand)]
    Fixed(finanza::cli::FixedCommands),

    /// Ask the AI advisor for feedback on this month's budget
    Advice,

    /// Export the budget to JSON, YAML or CSV
    Export(finanza::cli::ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Initialize tracing with output to stderr so stdout stays clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "finanza=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = FinanzaPaths::new()?;
    let settings = Settings::load_or_default(&paths);

    let audit = AuditLogger::new(paths.audit_log());
    let mut service =
        BudgetService::open(JsonFileStore::from_paths(&paths)).with_audit(audit.clone());

    match cli.command {
        Some(Commands::Summary) | None => {
            handle_summary_command(&service, &settings);
        }
        Some(Commands::Limit(cmd)) => {
            handle_limit_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Fixed(cmd)) => {
            handle_fixed_command(&mut service, &settings, cmd)?;
        }
        Some(Commands::Advice) => {
            handle_advice_command(&service, &settings).await?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(service.document(), args)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&audit, count)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }

            println!("Finanza Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Budget document:  {}", paths.budget_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Advice enabled:  {}", settings.advice.enabled);
            println!("  Advice model:    {}", settings.advice.model);
            println!(
                "  API key:         {}",
                if AdviceSettings::api_key_from_env().is_some() {
                    "set"
                } else {
                    "not set (FINANZA_API_KEY)"
                }
            );
        }
    }

    Ok(())
}
