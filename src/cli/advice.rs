//! Advice CLI command
//!
//! Sends a snapshot of the budget to the configured advice service and prints
//! the answer. Every failure ends in the fallback text, never an error.

use std::sync::Arc;

use crate::advice::{
    AdviceError, AdviceProvider, AdviceTask, GeminiConfig, GeminiProvider, ADVICE_ERROR_FALLBACK,
};
use crate::config::{AdviceSettings, Settings};
use crate::error::FinanzaResult;
use crate::services::BudgetService;
use crate::storage::DocumentStore;

/// Handle the advice command
pub async fn handle_advice_command<S: DocumentStore>(
    service: &BudgetService<S>,
    settings: &Settings,
) -> FinanzaResult<()> {
    if !settings.advice.enabled {
        println!("Advice is disabled in settings.");
        return Ok(());
    }

    let provider = match build_provider(&settings.advice) {
        Ok(provider) => provider,
        Err(err) => {
            tracing::warn!(error = %err, "advice service unavailable");
            println!("{}", ADVICE_ERROR_FALLBACK);
            return Ok(());
        }
    };

    let mut task = AdviceTask::new(provider);
    task.start(service.snapshot());

    let advice = task
        .wait()
        .await
        .unwrap_or_else(|| ADVICE_ERROR_FALLBACK.to_string());
    println!("{}", advice);

    Ok(())
}

fn build_provider(settings: &AdviceSettings) -> Result<Arc<dyn AdviceProvider>, AdviceError> {
    let api_key = AdviceSettings::api_key_from_env().ok_or(AdviceError::MissingApiKey)?;
    let provider = GeminiProvider::new(GeminiConfig::from_settings(settings, api_key))?;
    Ok(Arc::new(provider))
}
