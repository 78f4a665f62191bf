//! Storage layer for Finanza
//!
//! The budget document is persisted as one JSON blob under a fixed key.
//! `DocumentStore` is the persistence contract the budget service depends on;
//! `JsonFileStore` backs it with an atomically replaced file and
//! `MemoryStore` keeps it in memory for tests and embedding.

pub mod file_io;

pub use file_io::{quarantine, read_json, write_json_atomic};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::config::paths::FinanzaPaths;
use crate::error::{FinanzaError, FinanzaResult};
use crate::models::BudgetDocument;

/// Persistence contract for the budget document
pub trait DocumentStore {
    /// Load the stored document.
    ///
    /// A missing or unreadable document is a normal first-run state: the
    /// default document is returned instead of an error.
    fn load(&self) -> BudgetDocument;

    /// Replace the stored document with `document`
    fn save(&self, document: &BudgetDocument) -> FinanzaResult<()>;
}

/// Document store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the standard document location
    pub fn from_paths(paths: &FinanzaPaths) -> Self {
        Self::new(paths.budget_file())
    }

    /// Location of the document file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> BudgetDocument {
        match read_json::<BudgetDocument, _>(&self.path) {
            Ok(Some(document)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    expenses = document.expenses.len(),
                    fixed_costs = document.fixed_costs.len(),
                    "loaded budget document"
                );
                document
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no budget document yet, starting fresh");
                BudgetDocument::default()
            }
            Err(FinanzaError::Json(reason)) => {
                match quarantine(&self.path) {
                    Ok(moved) => tracing::warn!(
                        %reason,
                        moved_to = %moved.display(),
                        "budget document unreadable, starting fresh"
                    ),
                    Err(err) => tracing::warn!(
                        %reason,
                        error = %err,
                        "budget document unreadable and could not be moved aside"
                    ),
                }
                BudgetDocument::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read budget document, starting fresh");
                BudgetDocument::default()
            }
        }
    }

    fn save(&self, document: &BudgetDocument) -> FinanzaResult<()> {
        write_json_atomic(&self.path, document)?;
        tracing::debug!(path = %self.path.display(), "saved budget document");
        Ok(())
    }
}

/// In-memory document store
///
/// Keeps the serialized JSON so round trips go through the same encoding as
/// the file store. Saves can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a raw blob (which may be invalid)
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            ..Self::default()
        }
    }

    /// Create a store already holding `document`
    pub fn with_document(document: &BudgetDocument) -> FinanzaResult<Self> {
        Ok(Self::with_blob(serde_json::to_string(document)?))
    }

    /// The currently stored blob
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> BudgetDocument {
        self.blob()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default()
    }

    fn save(&self, document: &BudgetDocument) -> FinanzaResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(FinanzaError::Storage("memory store is read-only".into()));
        }

        let blob = serde_json::to_string(document)?;
        let mut guard = self
            .blob
            .lock()
            .map_err(|e| FinanzaError::Storage(format!("Failed to acquire lock: {}", e)))?;
        *guard = Some(blob);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
