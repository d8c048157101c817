use std::sync::Arc;

use crate::application::ports::{Notifier, SubmissionGateway};
use crate::application::services::ConversationService;

pub struct AppState<G, N>
where
    G: SubmissionGateway,
    N: Notifier,
{
    pub conversation: Arc<ConversationService<G, N>>,
    /// Surfaced in the view only once the conversation has completed.
    pub follow_up_url: String,
}

impl<G, N> Clone for AppState<G, N>
where
    G: SubmissionGateway,
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            conversation: Arc::clone(&self.conversation),
            follow_up_url: self.follow_up_url.clone(),
        }
    }
}
