use super::{Entry, EntryId, EntryOrigin};

/// Append-only conversation transcript.
///
/// Entries are never edited or reordered; append order is the conversation
/// order. The only destructive operation is [`Timeline::clear`], used by a
/// full conversation reset.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the tail and returns its id. Always succeeds.
    pub fn append(&mut self, text: impl Into<String>, origin: EntryOrigin) -> EntryId {
        self.next_id += 1;
        let id = EntryId::new(self.next_id);
        self.entries.push(Entry::new(id, origin, text.into()));
        id
    }

    /// Removes all entries. The id counter keeps running so ids stay unique
    /// across resets within one engine lifetime.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in append order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
