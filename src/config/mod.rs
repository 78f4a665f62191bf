//! Configuration module for Finanza
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Advice service configuration

pub mod paths;
pub mod settings;

pub use paths::FinanzaPaths;
pub use settings::{AdviceSettings, Settings};
