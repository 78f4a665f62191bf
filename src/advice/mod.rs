//! Financial advice from an external text-generation service
//!
//! The budget core never depends on this module. Advice is requested with a
//! read-only snapshot of the document and always resolves to displayable
//! text: service failures become a fixed fallback message.
//!
//! - `AdviceProvider`: the pluggable service boundary.
//! - `GeminiProvider`: HTTP implementation for the Gemini API.
//! - `AdviceTask`: runs one request at a time and abandons stale ones.

mod gemini;
mod task;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use task::AdviceTask;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::BudgetDocument;
use crate::services::BudgetSummary;

/// Shown when the advice service cannot be reached or fails
pub const ADVICE_ERROR_FALLBACK: &str =
    "Could not reach the financial advisor right now. Please try again later.";

/// Shown when the advice service answers with no text
pub const ADVICE_EMPTY_FALLBACK: &str = "No analysis could be generated at the moment.";

/// Errors raised by advice providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdviceError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A service that turns a prompt into natural-language text
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Generate text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError>;
}

/// Render the document into the prompt sent to the advice service
pub fn build_prompt(doc: &BudgetDocument) -> String {
    let summary = BudgetSummary::from_document(doc);

    let fixed_list = describe_entries(doc.fixed_costs.iter().map(|f| (&f.description, f.amount)));
    let expense_list = describe_entries(doc.expenses.iter().map(|e| (&e.description, e.amount)));

    let fixed_share = summary
        .fixed_share()
        .map(|pct| format!("{:.1}% of the monthly limit", pct))
        .unwrap_or_else(|| "no monthly limit set".to_string());

    format!(
        "Act as an expert personal financial advisor.\n\
         Analyze the user's finances for the current month:\n\
         - Monthly limit: {limit}\n\
         - Total fixed costs: {fixed} ({share})\n\
         - Total variable expenses: {expenses}\n\
         - Remaining balance: {remaining}\n\
         \n\
         Fixed costs: {fixed_list}\n\
         Variable expenses: {expense_list}\n\
         \n\
         Give brief feedback (at most 3 paragraphs):\n\
         1. A quick assessment of this month's financial health.\n\
         2. Whether fixed costs are too high (suggested rule: at most 50% of the limit).\n\
         3. One practical tip to save money based on the current expenses.\n\
         \n\
         Be motivating and direct.",
        limit = summary.monthly_limit,
        fixed = summary.total_fixed,
        share = fixed_share,
        expenses = summary.total_expenses,
        remaining = summary.remaining,
        fixed_list = fixed_list,
        expense_list = expense_list,
    )
}

fn describe_entries<'a>(entries: impl Iterator<Item = (&'a String, crate::models::Money)>) -> String {
    let items: Vec<String> = entries
        .map(|(description, amount)| format!("{} ({})", description, amount))
        .collect();

    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Ask `provider` for advice on `doc`. Never fails.
pub async fn request_advice<P>(provider: &P, doc: &BudgetDocument) -> String
where
    P: AdviceProvider + ?Sized,
{
    let prompt = build_prompt(doc);

    match provider.generate(&prompt).await {
        Ok(text) if text.trim().is_empty() => {
            tracing::warn!("advice service returned an empty answer");
            ADVICE_EMPTY_FALLBACK.to_string()
        }
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            tracing::error!(error = %err, "advice request failed");
            ADVICE_ERROR_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Expense, FixedCost, Money};
    use std::sync::Mutex;

    /// Provider answering with a fixed result and remembering prompts
    pub(crate) struct CannedProvider {
        answer: Result<String, AdviceError>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl CannedProvider {
        pub(crate) fn answering(text: &str) -> Self {
            Self {
                answer: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(err: AdviceError) -> Self {
            Self {
                answer: Err(err),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AdviceProvider for CannedProvider {
        async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone()
        }
    }

    fn sample_document() -> BudgetDocument {
        let mut doc = BudgetDocument::default();
        doc.monthly_limit = Money::from_cents(200000);
        doc.fixed_costs.push(FixedCost::new("Rent", Money::from_cents(100000)));
        doc.expenses.push(Expense::new("Groceries", Money::from_cents(15050)));
        doc
    }

    #[test]
    fn test_prompt_contains_totals_and_lists() {
        let prompt = build_prompt(&sample_document());

        assert!(prompt.contains("Monthly limit: $2000.00"));
        assert!(prompt.contains("Total fixed costs: $1000.00 (50.0% of the monthly limit)"));
        assert!(prompt.contains("Total variable expenses: $150.50"));
        assert!(prompt.contains("Remaining balance: $849.50"));
        assert!(prompt.contains("Fixed costs: Rent ($1000.00)"));
        assert!(prompt.contains("Variable expenses: Groceries ($150.50)"));
    }

    #[test]
    fn test_prompt_for_empty_document() {
        let prompt = build_prompt(&BudgetDocument::default());

        assert!(prompt.contains("no monthly limit set"));
        assert!(prompt.contains("Fixed costs: none"));
        assert!(prompt.contains("Variable expenses: none"));
    }

    #[tokio::test]
    async fn test_request_advice_returns_answer() {
        let provider = CannedProvider::answering("  Looking good.  ");
        let doc = sample_document();

        let advice = request_advice(&provider, &doc).await;

        assert_eq!(advice, "Looking good.");
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt(&doc));
    }

    #[tokio::test]
    async fn test_request_advice_failure_uses_fallback() {
        let provider = CannedProvider::failing(AdviceError::Network("connection refused".into()));

        let advice = request_advice(&provider, &sample_document()).await;
        assert_eq!(advice, ADVICE_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_request_advice_empty_answer_uses_fallback() {
        let provider = CannedProvider::answering("   ");

        let advice = request_advice(&provider, &sample_document()).await;
        assert_eq!(advice, ADVICE_EMPTY_FALLBACK);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AdviceError::Status {
                status: 429,
                message: "quota".into()
            }
            .to_string(),
            "service returned HTTP 429: quota"
        );
        assert_eq!(AdviceError::MissingApiKey.to_string(), "no API key configured");
    }
}
