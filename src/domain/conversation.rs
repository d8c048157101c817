use super::{Lead, Phase, Timeline};

/// The single conversation instance owned by the engine.
///
/// A reset replaces the whole value: fresh timeline, fresh lead, phase back
/// to `Welcome`, flags cleared.
#[derive(Debug, Default)]
pub struct Conversation {
    pub timeline: Timeline,
    pub lead: Lead,
    pub phase: Phase,
    /// The assistant is "typing"; the next entry appears after a fixed delay.
    pub composing: bool,
    /// The qualifying question is pending a SIM/NÃO choice instead of free text.
    pub awaiting_quick_reply: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }
}
