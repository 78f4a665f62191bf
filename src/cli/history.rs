//! History CLI command
//!
//! Prints the most recent entries of the audit trail.

use crate::audit::AuditLogger;
use crate::error::FinanzaResult;

/// Handle the history command
pub fn handle_history_command(logger: &AuditLogger, count: usize) -> FinanzaResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
