use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{LeadSubmission, SubmissionGateway, SubmissionGatewayError};

/// Posts the collected lead as JSON to the configured webhook endpoint.
///
/// The response body is never interpreted: anything 2xx is success, anything
/// else is a failure of the call itself.
pub struct WebhookGateway {
    client: Client,
    url: String,
}

impl WebhookGateway {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl SubmissionGateway for WebhookGateway {
    async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmissionGatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmissionGatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SubmissionGatewayError::RejectedStatus(
                response.status().as_u16(),
            ));
        }

        Ok(())
    }
}
