use std::time::Duration;

/// Timing constants for the composing-indicator discipline. Shared by the
/// announcer and the reply path of the step flow rather than scattered
/// through the logic.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// How long the assistant "types" before a line appears.
    pub composing_delay: Duration,
    /// Reading pause between consecutive scripted lines.
    pub inter_message_delay: Duration,
}

impl Pacing {
    pub fn from_millis(composing_delay_ms: u64, inter_message_delay_ms: u64) -> Self {
        Self {
            composing_delay: Duration::from_millis(composing_delay_ms),
            inter_message_delay: Duration::from_millis(inter_message_delay_ms),
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(1500, 1000)
    }
}
