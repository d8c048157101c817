use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Lead;

/// Wire payload for the outbound submission call. Field names match the
/// endpoint contract, so they stay in Portuguese on purpose.
#[derive(Debug, Clone, Serialize)]
pub struct LeadSubmission {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub origem: String,
}

impl LeadSubmission {
    pub fn package(lead: &Lead, source: &str) -> Self {
        Self {
            nome: lead.full_name.clone().unwrap_or_default(),
            telefone: lead.phone.clone().unwrap_or_default(),
            email: lead.email.clone().unwrap_or_default(),
            timestamp: Utc::now(),
            origem: source.to_string(),
        }
    }
}

/// Outbound boundary for delivering a collected lead. One best-effort call;
/// the response body is never interpreted.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmissionGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionGatewayError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("endpoint rejected submission: HTTP {0}")]
    RejectedStatus(u16),
}
