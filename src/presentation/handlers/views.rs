use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::{CommandOutcome, ConversationSnapshot};
use crate::domain::{quick_reply_labels, Entry, Phase};

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: u64,
    pub origin: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.value(),
            origin: entry.origin.to_string(),
            text: entry.text.clone(),
            created_at: entry.created_at,
        }
    }
}

/// What the rendering surface needs to draw the conversation: the transcript,
/// the composing indicator, and which input affordance is currently live.
#[derive(Debug, Serialize)]
pub struct ConversationView {
    pub entries: Vec<EntryView>,
    pub phase: String,
    pub composing: bool,
    pub awaiting_quick_reply: bool,
    /// The two fixed labels, present only while the qualifier is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
    /// The group-invite link, present only once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_url: Option<String>,
}

impl ConversationView {
    pub fn render(snapshot: &ConversationSnapshot, follow_up_url: &str) -> Self {
        let quick_replies = snapshot.awaiting_quick_reply.then(|| {
            quick_reply_labels()
                .iter()
                .map(|label| (*label).to_string())
                .collect()
        });
        let follow_up_url =
            (snapshot.phase == Phase::Completed).then(|| follow_up_url.to_string());
        Self {
            entries: snapshot.entries.iter().map(EntryView::from).collect(),
            phase: snapshot.phase.to_string(),
            composing: snapshot.composing,
            awaiting_quick_reply: snapshot.awaiting_quick_reply,
            quick_replies,
            follow_up_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuickReplyRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

impl From<CommandOutcome> for CommandResponse {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Accepted => Self {
                accepted: true,
                rejection: None,
            },
            CommandOutcome::Rejected(rejection) => Self {
                accepted: false,
                rejection: Some(rejection.to_string()),
            },
        }
    }
}
