//! User settings for Finanza
//!
//! Manages display preferences and the advice service configuration. API
//! credentials are never stored here; they come from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FinanzaPaths;
use crate::error::FinanzaError;

/// Primary environment variable holding the advice service API key
pub const API_KEY_ENV: &str = "FINANZA_API_KEY";

/// Fallback environment variable for the API key
pub const API_KEY_FALLBACK_ENV: &str = "API_KEY";

/// Advice service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceSettings {
    /// Whether the `advice` command may call the external service
    #[serde(default = "default_advice_enabled")]
    pub enabled: bool,

    /// Model name passed to the text-generation service
    #[serde(default = "default_advice_model")]
    pub model: String,

    /// Base URL of the text-generation API
    #[serde(default = "default_advice_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_advice_timeout")]
    pub timeout_secs: u64,
}

fn default_advice_enabled() -> bool {
    true
}

fn default_advice_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_advice_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_advice_timeout() -> u64 {
    30
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            enabled: default_advice_enabled(),
            model: default_advice_model(),
            base_url: default_advice_base_url(),
            timeout_secs: default_advice_timeout(),
        }
    }
}

impl AdviceSettings {
    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the environment, if one is set
    pub fn api_key_from_env() -> Option<String> {
        [API_KEY_ENV, API_KEY_FALLBACK_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

/// User settings for Finanza
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Advice service configuration
    #[serde(default)]
    pub advice: AdviceSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            advice: AdviceSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinanzaPaths) -> Result<Self, FinanzaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanzaError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanzaError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Load settings, falling back to defaults when the file cannot be read
    /// or parsed. The broken file is left in place for the user to fix.
    pub fn load_or_default(paths: &FinanzaPaths) -> Self {
        Self::load_or_create(paths).unwrap_or_else(|err| {
            tracing::warn!(
                error = %err,
                path = %paths.settings_file().display(),
                "ignoring unusable settings file, using defaults"
            );
            Settings::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanzaPaths) -> Result<(), FinanzaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanzaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanzaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.advice.enabled);
        assert_eq!(settings.advice.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "R$".to_string();
        settings.advice.enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "R$");
        assert!(!loaded.advice.enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.advice, AdviceSettings::default());
    }

    #[test]
    fn test_invalid_settings_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanzaError::Config(_)));
    }

    #[test]
    fn test_invalid_settings_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ broken").unwrap();

        assert_eq!(Settings::load_or_default(&paths), Settings::default());
        assert_eq!(
            std::fs::read_to_string(paths.settings_file()).unwrap(),
            "{ broken"
        );
    }
}
