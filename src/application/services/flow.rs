use std::fmt;

use crate::domain::{is_valid_quick_reply, LeadField, Phase};

use super::script;

/// Input the step flow can react to.
#[derive(Debug, Clone)]
pub enum FlowEvent {
    /// The announcer finished the opening burst.
    OpeningFinished,
    /// One of the two quick-reply labels was chosen.
    QuickReply(String),
    /// Free text was submitted.
    FreeText(String),
}

/// Everything a successful transition asks the caller to do. The reducer
/// itself performs no I/O; the conversation service executes these effects.
#[derive(Debug, Clone)]
pub struct Transition {
    pub next_phase: Phase,
    pub awaiting_quick_reply: bool,
    /// Human transcript entry to append (already trimmed).
    pub human_entry: Option<String>,
    /// Assistant reply to append under the composing discipline.
    pub assistant_reply: Option<String>,
    /// Lead field to record before the reply is paced out.
    pub set_field: Option<(LeadField, String)>,
    /// Fire the submission dispatcher (email step only).
    pub submit: bool,
}

impl Transition {
    fn to_phase(next_phase: Phase) -> Self {
        Self {
            next_phase,
            awaiting_quick_reply: false,
            human_entry: None,
            assistant_reply: None,
            set_field: None,
            submit: false,
        }
    }
}

/// Why an input produced no transition. Rejections are visible no-ops, never
/// errors: the conversation stays exactly where it was and the user retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyInput,
    InvalidQuickReply,
    QuickReplyNotAvailable,
    FreeTextNotAvailable,
    AlreadyCompleted,
    OpeningAlreadyPlayed,
    /// A previous reply is still being composed; input is serialized so two
    /// assistant messages can never be in flight at once.
    ReplyPending,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::EmptyInput => "empty input",
            Rejection::InvalidQuickReply => "invalid quick reply",
            Rejection::QuickReplyNotAvailable => "quick reply not available",
            Rejection::FreeTextNotAvailable => "free text not available",
            Rejection::AlreadyCompleted => "conversation completed",
            Rejection::OpeningAlreadyPlayed => "opening already played",
            Rejection::ReplyPending => "reply pending",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The step state machine as a pure reducer over the fixed question order.
///
/// Fields can only ever be populated in order: the table simply has no edge
/// that reaches a later field before its predecessor phase.
pub fn advance(
    phase: Phase,
    awaiting_quick_reply: bool,
    event: &FlowEvent,
) -> Result<Transition, Rejection> {
    match event {
        FlowEvent::OpeningFinished => {
            if phase != Phase::Welcome {
                return Err(Rejection::OpeningAlreadyPlayed);
            }
            Ok(Transition {
                awaiting_quick_reply: true,
                ..Transition::to_phase(Phase::AwaitingQualifier)
            })
        }
        FlowEvent::QuickReply(value) => {
            if phase == Phase::Completed {
                return Err(Rejection::AlreadyCompleted);
            }
            if !awaiting_quick_reply {
                return Err(Rejection::QuickReplyNotAvailable);
            }
            if !is_valid_quick_reply(value) {
                return Err(Rejection::InvalidQuickReply);
            }
            Ok(Transition {
                human_entry: Some(value.clone()),
                assistant_reply: Some(script::ASK_NAME.to_string()),
                ..Transition::to_phase(Phase::CollectingName)
            })
        }
        FlowEvent::FreeText(text) => {
            if phase == Phase::Completed {
                return Err(Rejection::AlreadyCompleted);
            }
            if awaiting_quick_reply {
                return Err(Rejection::FreeTextNotAvailable);
            }
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(Rejection::EmptyInput);
            }
            let input = trimmed.to_string();
            match phase {
                Phase::CollectingName => Ok(Transition {
                    human_entry: Some(input.clone()),
                    assistant_reply: Some(script::ask_phone(&input)),
                    set_field: Some((LeadField::FullName, input)),
                    ..Transition::to_phase(Phase::CollectingPhone)
                }),
                Phase::CollectingPhone => Ok(Transition {
                    human_entry: Some(input.clone()),
                    assistant_reply: Some(script::ASK_EMAIL.to_string()),
                    set_field: Some((LeadField::Phone, input)),
                    ..Transition::to_phase(Phase::CollectingEmail)
                }),
                Phase::CollectingEmail => Ok(Transition {
                    human_entry: Some(input.clone()),
                    assistant_reply: Some(script::CONFIRMATION.to_string()),
                    set_field: Some((LeadField::Email, input)),
                    submit: true,
                    ..Transition::to_phase(Phase::Completed)
                }),
                // Welcome and AwaitingQualifier take no free text.
                _ => Err(Rejection::FreeTextNotAvailable),
            }
        }
    }
}
