use chrono::{DateTime, Utc};

use super::{EntryId, EntryOrigin};

/// One immutable line of the conversation transcript.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: EntryId,
    pub origin: EntryOrigin,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(id: EntryId, origin: EntryOrigin, text: String) -> Self {
        Self {
            id,
            origin,
            text,
            created_at: Utc::now(),
        }
    }
}
