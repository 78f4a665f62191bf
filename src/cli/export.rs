//! CLI command for data export
//!
//! Writes the budget document as JSON, YAML or CSV to a file or stdout.

use crate::error::{FinanzaError, FinanzaResult};
use crate::export::{csv, json, yaml};
use crate::models::BudgetDocument;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (document and totals)
    Json,
    /// YAML format (document and totals, human-readable)
    Yaml,
    /// CSV format (one row per fixed cost and expense)
    Csv,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(doc: &BudgetDocument, args: ExportArgs) -> FinanzaResult<()> {
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanzaError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => json::export_full_json(doc, &mut writer, !args.compact)?,
        ExportFormat::Yaml => yaml::export_full_yaml(doc, &mut writer)?,
        ExportFormat::Csv => csv::export_entries_csv(doc, &mut writer)?,
    }

    if matches!(args.format, ExportFormat::Json) && args.output.is_none() {
        writeln!(writer).map_err(|e| FinanzaError::Export(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| FinanzaError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), format = ?args.format, "budget exported");
        println!(
            "Exported {} fixed costs and {} expenses to: {}",
            doc.fixed_costs.len(),
            doc.expenses.len(),
            path.display()
        );
    }

    Ok(())
}
