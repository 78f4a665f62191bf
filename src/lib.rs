//! Finanza - Terminal personal budgeting dashboard
//!
//! This library provides the core functionality for the Finanza budgeting
//! application: a monthly spending limit, recurring fixed costs and variable
//! expenses, kept in a single JSON document on the local machine.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, fixed costs, the document)
//! - `storage`: Document persistence (JSON file and in-memory stores)
//! - `services`: Budget mutations and aggregation
//! - `audit`: Audit logging system
//! - `advice`: Financial advice from an external text-generation service
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `finanza` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use finanza::services::BudgetService;
//! use finanza::storage::MemoryStore;
//!
//! let mut service = BudgetService::open(MemoryStore::new());
//! service.set_monthly_limit("2000")?;
//! service.add_expense("Groceries", "150,00")?;
//!
//! assert_eq!(service.summary().remaining.cents(), 185000);
//! # Ok::<(), finanza::FinanzaError>(())
//! ```

pub mod advice;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanzaError, FinanzaResult};
