mod conversation;
mod entry;
mod entry_id;
mod entry_origin;
mod lead;
mod phase;
mod quick_reply;
mod timeline;

pub use conversation::Conversation;
pub use entry::Entry;
pub use entry_id::EntryId;
pub use entry_origin::EntryOrigin;
pub use lead::{Lead, LeadField};
pub use phase::Phase;
pub use quick_reply::{
    is_valid_quick_reply, quick_reply_labels, QUICK_REPLY_NO, QUICK_REPLY_YES,
};
pub use timeline::Timeline;
