//! Export module for Finanza
//!
//! Provides budget data export in multiple formats:
//! - CSV: fixed costs and expenses, one row each (spreadsheet-compatible)
//! - JSON: machine-readable document export with totals
//! - YAML: human-readable document export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_entries_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
