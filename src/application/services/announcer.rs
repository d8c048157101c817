//! Cooperative sequencer for scripted assistant bursts.
//!
//! Each line goes through the composing discipline, with a reading pause
//! between lines. Every side effect re-checks the generation token under the
//! lock: a reset bumps the generation, so a still-suspended run from before
//! the reset can never append into the new timeline.

use tokio::sync::Mutex;

use crate::domain::EntryOrigin;

use super::conversation_service::EngineState;
use super::flow::{self, FlowEvent};
use super::pacing::Pacing;
use super::script::Script;

/// Composing discipline shared by scripted bursts and step-flow replies:
/// composing on, think-time delay, append, composing off. Returns `false`
/// without touching anything if the run went stale.
pub(crate) async fn paced_append(
    state: &Mutex<EngineState>,
    pacing: &Pacing,
    generation: u64,
    text: &str,
) -> bool {
    {
        let mut state = state.lock().await;
        if state.generation != generation {
            return false;
        }
        state.conversation.composing = true;
    }

    tokio::time::sleep(pacing.composing_delay).await;

    let mut state = state.lock().await;
    if state.generation != generation {
        // A reset owns the flags now; leave them alone.
        return false;
    }
    state
        .conversation
        .timeline
        .append(text, EntryOrigin::Assistant);
    state.conversation.composing = false;
    true
}

/// Plays the whole script, then opens the qualifying question for quick
/// replies. Suspends until every line has been appended; stops silently if a
/// reset invalidates the run mid-script.
pub(crate) async fn play(
    state: &Mutex<EngineState>,
    pacing: &Pacing,
    generation: u64,
    script: &Script,
) {
    for (index, line) in script.lines().iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(pacing.inter_message_delay).await;
        }
        if !paced_append(state, pacing, generation, line).await {
            tracing::debug!(generation, "scripted burst went stale, stopping");
            return;
        }
    }

    let mut state = state.lock().await;
    if state.generation != generation {
        return;
    }
    let event = FlowEvent::OpeningFinished;
    if let Ok(transition) = flow::advance(
        state.conversation.phase,
        state.conversation.awaiting_quick_reply,
        &event,
    ) {
        state.conversation.phase = transition.next_phase;
        state.conversation.awaiting_quick_reply = transition.awaiting_quick_reply;
        tracing::debug!(generation, "opening script finished, qualifier open");
    }
}
