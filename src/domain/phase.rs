use std::fmt;

/// Which step of the scripted flow the conversation is on.
///
/// Transitions only ever move forward; `Completed` is absorbing. The
/// transient composing / awaiting-quick-reply flags live on
/// [`super::Conversation`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Welcome,
    AwaitingQualifier,
    CollectingName,
    CollectingPhone,
    CollectingEmail,
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Welcome => "welcome",
            Phase::AwaitingQualifier => "awaiting-qualifier",
            Phase::CollectingName => "collecting-name",
            Phase::CollectingPhone => "collecting-phone",
            Phase::CollectingEmail => "collecting-email",
            Phase::Completed => "completed",
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Welcome
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
