mod announcer;
mod conversation_service;
mod dispatcher;
mod flow;
mod pacing;
mod script;

pub use conversation_service::{CommandOutcome, ConversationService, ConversationSnapshot};
pub use dispatcher::{SubmissionDispatcher, SubmissionOutcome};
pub use flow::{advance, FlowEvent, Rejection, Transition};
pub use pacing::Pacing;
pub use script::{opening_script, Script};
