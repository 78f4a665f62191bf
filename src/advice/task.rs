//! Background advice request
//!
//! Only the latest request matters: starting a new one or dropping the task
//! abandons whatever is still in flight.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::models::BudgetDocument;

use super::{request_advice, AdviceProvider, ADVICE_ERROR_FALLBACK};

/// Runs advice requests on the tokio runtime, one at a time
pub struct AdviceTask {
    provider: Arc<dyn AdviceProvider>,
    in_flight: Option<JoinHandle<String>>,
}

impl AdviceTask {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self {
            provider,
            in_flight: None,
        }
    }

    /// Start a request for `snapshot`, abandoning any earlier one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, snapshot: BudgetDocument) {
        self.cancel();

        let provider = Arc::clone(&self.provider);
        self.in_flight = Some(tokio::spawn(async move {
            request_advice(provider.as_ref(), &snapshot).await
        }));
    }

    /// Whether a request has been started and not yet collected
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Abandon the in-flight request, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!("abandoning in-flight advice request");
            }
            handle.abort();
        }
    }

    /// Wait for the current request.
    ///
    /// Returns `None` when nothing was started or the request was abandoned.
    pub async fn wait(&mut self) -> Option<String> {
        let handle = self.in_flight.take()?;
        match handle.await {
            Ok(text) => Some(text),
            Err(err) if err.is_cancelled() => None,
            Err(err) => {
                tracing::error!(error = %err, "advice task panicked");
                Some(ADVICE_ERROR_FALLBACK.to_string())
            }
        }
    }
}

impl Drop for AdviceTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::tests::CannedProvider;
    use crate::advice::AdviceError;
    use crate::models::{Expense, Money};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Stalls on prompts mentioning "Stale", answers others immediately
    struct StallingProvider {
        finished: AtomicUsize,
    }

    #[async_trait]
    impl AdviceProvider for StallingProvider {
        async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
            if prompt.contains("Stale") {
                tokio::time::sleep(Duration::from_secs(300)).await;
                self.finished.fetch_add(1, Ordering::SeqCst);
                return Ok("stale advice".to_string());
            }
            self.finished.fetch_add(1, Ordering::SeqCst);
            Ok("fresh advice".to_string())
        }
    }

    fn document_with(description: &str) -> BudgetDocument {
        let mut doc = BudgetDocument::default();
        doc.expenses.push(Expense::new(description, Money::from_cents(100)));
        doc
    }

    #[tokio::test]
    async fn test_wait_returns_advice() {
        let mut task = AdviceTask::new(Arc::new(CannedProvider::answering("Save more.")));

        task.start(BudgetDocument::default());
        assert!(task.is_pending());

        assert_eq!(task.wait().await.as_deref(), Some("Save more."));
        assert!(!task.is_pending());
    }

    #[tokio::test]
    async fn test_wait_without_request_is_none() {
        let mut task = AdviceTask::new(Arc::new(CannedProvider::answering("unused")));
        assert!(task.wait().await.is_none());
    }

    #[tokio::test]
    async fn test_failure_resolves_to_fallback() {
        let provider = CannedProvider::failing(AdviceError::Timeout { timeout_secs: 30 });
        let mut task = AdviceTask::new(Arc::new(provider));

        task.start(BudgetDocument::default());
        assert_eq!(task.wait().await.as_deref(), Some(ADVICE_ERROR_FALLBACK));
    }

    #[tokio::test]
    async fn test_newer_request_replaces_older() {
        let provider = Arc::new(StallingProvider {
            finished: AtomicUsize::new(0),
        });
        let mut task = AdviceTask::new(provider.clone());

        task.start(document_with("Stale"));
        task.start(document_with("Fresh"));

        assert_eq!(task.wait().await.as_deref(), Some("fresh advice"));
        assert_eq!(provider.finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_aborted_request_yields_none() {
        let provider = Arc::new(StallingProvider {
            finished: AtomicUsize::new(0),
        });
        let mut task = AdviceTask::new(provider.clone());

        task.start(document_with("Stale"));
        // Aborted out from under the task, as on runtime shutdown
        if let Some(handle) = task.in_flight.as_ref() {
            handle.abort();
        }

        assert!(task.wait().await.is_none());
        assert!(!task.is_pending());
        assert_eq!(provider.finished.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancel_abandons_request() {
        let provider = Arc::new(StallingProvider {
            finished: AtomicUsize::new(0),
        });
        let mut task = AdviceTask::new(provider.clone());

        task.start(document_with("Stale"));
        task.cancel();

        assert!(!task.is_pending());
        assert!(task.wait().await.is_none());
        assert_eq!(provider.finished.load(Ordering::SeqCst), 0);
    }
}
