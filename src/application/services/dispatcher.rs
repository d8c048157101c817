use std::sync::Arc;

use crate::application::ports::{LeadSubmission, Notifier, SubmissionGateway};
use crate::domain::Lead;

// Toast copy mirrors the product behavior: the failure toast still tells the
// user their data was collected, because UX success is decoupled from backend
// success.
const SUCCESS_TOAST: &str = "Dados enviados com sucesso!";
const FAILURE_TOAST: &str = "Dados coletados com sucesso!";

/// Classification of one best-effort submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Packages the collected lead and performs the single outbound call.
///
/// No retry, no backoff, no queuing. A failure is notified and logged but
/// never surfaces to the conversation, which completes regardless.
pub struct SubmissionDispatcher<G, N> {
    gateway: Arc<G>,
    notifier: Arc<N>,
    source: String,
}

impl<G, N> SubmissionDispatcher<G, N>
where
    G: SubmissionGateway,
    N: Notifier,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>, source: String) -> Self {
        Self {
            gateway,
            notifier,
            source,
        }
    }

    #[tracing::instrument(skip(self, lead))]
    pub async fn submit(&self, lead: &Lead) -> SubmissionOutcome {
        let submission = LeadSubmission::package(lead, &self.source);
        tracing::debug!(origem = %submission.origem, "Dispatching lead submission");

        match self.gateway.submit(&submission).await {
            Ok(()) => {
                tracing::info!("Lead submission delivered");
                self.notifier.notify_success(SUCCESS_TOAST);
                SubmissionOutcome::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "Lead submission failed");
                self.notifier.notify_failure(FAILURE_TOAST);
                SubmissionOutcome::Failure(e.to_string())
            }
        }
    }
}
