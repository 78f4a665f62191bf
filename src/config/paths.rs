//! Path management for Finanza
//!
//! Resolves where the budget document, settings and audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANZA_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/finanza` on Linux, `~/Library/Application Support/finanza`
//!    on macOS, `%APPDATA%\finanza\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanzaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANZA_DATA_DIR";

/// Fixed key (file name) under which the budget document is stored
pub const BUDGET_DOCUMENT_FILE: &str = "finanza_data.json";

/// Manages all paths used by Finanza
#[derive(Debug, Clone)]
pub struct FinanzaPaths {
    /// Base directory for all Finanza data
    base_dir: PathBuf,
}

impl FinanzaPaths {
    /// Create a new FinanzaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, FinanzaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinanzaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the persisted budget document
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join(BUDGET_DOCUMENT_FILE)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanzaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanzaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanzaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanzaError> {
    ProjectDirs::from("", "", "finanza")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinanzaError::Config("Could not determine a home directory".into()))
}
