use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Conversation, Entry, EntryOrigin, Phase};

use super::announcer;
use super::dispatcher::SubmissionDispatcher;
use super::flow::{self, FlowEvent, Rejection};
use super::pacing::Pacing;
use super::script::{opening_script, Script};
use crate::application::ports::{Notifier, SubmissionGateway};

/// Everything behind the conversation lock. The lock is never held across an
/// await; paced work re-acquires it and re-checks `generation` before every
/// side effect.
pub(crate) struct EngineState {
    pub(crate) conversation: Conversation,
    /// Bumped by every reset; stale suspended runs see a mismatch and stop.
    pub(crate) generation: u64,
    /// The timeline stays empty until the first paced append lands, so the
    /// emptiness guard alone would let a second `start` slip in. This latch
    /// closes that window.
    pub(crate) opening_started: bool,
    /// At most one submission per conversation instance.
    pub(crate) submission_fired: bool,
}

/// Result of a command from the input surface. Rejected input is a visible
/// no-op: no transition, no transcript entry, the user simply retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Rejected(Rejection),
}

impl CommandOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CommandOutcome::Accepted)
    }
}

/// Read-only view of the conversation for the rendering surface.
#[derive(Debug, Clone)]
pub struct ConversationSnapshot {
    pub entries: Vec<Entry>,
    pub phase: Phase,
    pub composing: bool,
    pub awaiting_quick_reply: bool,
}

/// Composition root of the engine: owns the one timeline, lead, and phase for
/// the lifetime of a conversation, and drives the announcer, the step flow,
/// and the submission dispatcher.
pub struct ConversationService<G, N> {
    state: Arc<Mutex<EngineState>>,
    pacing: Pacing,
    script: Script,
    dispatcher: Arc<SubmissionDispatcher<G, N>>,
}

impl<G, N> ConversationService<G, N>
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    pub fn new(dispatcher: Arc<SubmissionDispatcher<G, N>>, pacing: Pacing) -> Self {
        Self {
            state: Arc::new(Mutex::new(EngineState {
                conversation: Conversation::new(),
                generation: 0,
                opening_started: false,
                submission_fired: false,
            })),
            pacing,
            script: opening_script(),
            dispatcher,
        }
    }

    /// Plays the opening script at most once per timeline lifetime. Safe to
    /// call repeatedly; later calls are no-ops until a reset.
    #[tracing::instrument(skip(self))]
    pub async fn start(&self) {
        let generation = {
            let mut state = self.state.lock().await;
            if state.opening_started || !state.conversation.timeline.is_empty() {
                tracing::debug!("start ignored: opening already played");
                return;
            }
            state.opening_started = true;
            state.generation
        };
        tracing::info!(generation, "Opening script started");
        self.spawn_script_run(generation);
    }

    /// Discards the whole conversation and plays the opening script again.
    /// Any in-flight paced work from before the reset is invalidated by the
    /// generation bump and can never append into the new timeline.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            // Keep the timeline value (and its id counter) but drop entries,
            // so ids stay unique across resets.
            state.conversation.timeline.clear();
            state.conversation.lead = Default::default();
            state.conversation.phase = Phase::Welcome;
            state.conversation.composing = false;
            state.conversation.awaiting_quick_reply = false;
            state.opening_started = true;
            state.submission_fired = false;
            state.generation
        };
        tracing::info!(generation, "Conversation reset");
        self.spawn_script_run(generation);
    }

    /// Answers the qualifying question with one of the two fixed labels.
    #[tracing::instrument(skip(self, value))]
    pub async fn submit_quick_reply(&self, value: &str) -> CommandOutcome {
        self.apply(FlowEvent::QuickReply(value.to_string())).await
    }

    /// Submits free text for whichever field is currently being collected.
    /// On the email step the submission dispatcher fires in the background;
    /// the conversation completes without waiting on it.
    #[tracing::instrument(skip(self, text))]
    pub async fn submit_free_text(&self, text: &str) -> CommandOutcome {
        self.apply(FlowEvent::FreeText(text.to_string())).await
    }

    pub async fn snapshot(&self) -> ConversationSnapshot {
        let state = self.state.lock().await;
        ConversationSnapshot {
            entries: state.conversation.timeline.entries().to_vec(),
            phase: state.conversation.phase,
            composing: state.conversation.composing,
            awaiting_quick_reply: state.conversation.awaiting_quick_reply,
        }
    }

    /// Current lead, for observability surfaces.
    pub async fn lead(&self) -> crate::domain::Lead {
        self.state.lock().await.conversation.lead.clone()
    }

    /// Runs one event through the reducer, executes its effects, and paces
    /// out the assistant reply. Suspends until the reply has been appended.
    async fn apply(&self, event: FlowEvent) -> CommandOutcome {
        let (generation, reply, submit) = {
            let mut state = self.state.lock().await;
            // Serialize input against in-flight replies so two assistant
            // messages are never composed concurrently.
            if state.conversation.composing {
                return CommandOutcome::Rejected(Rejection::ReplyPending);
            }
            let transition = match flow::advance(
                state.conversation.phase,
                state.conversation.awaiting_quick_reply,
                &event,
            ) {
                Ok(transition) => transition,
                Err(rejection) => {
                    tracing::debug!(rejection = %rejection, "Input rejected");
                    return CommandOutcome::Rejected(rejection);
                }
            };
            if let Some(text) = &transition.human_entry {
                state
                    .conversation
                    .timeline
                    .append(text.clone(), EntryOrigin::Human);
            }
            if let Some((field, value)) = transition.set_field.clone() {
                state.conversation.lead.set(field, value);
            }
            state.conversation.awaiting_quick_reply = transition.awaiting_quick_reply;
            let next_phase = transition.next_phase;
            tracing::debug!(from = %state.conversation.phase, to = %next_phase, "Phase advanced");
            state.conversation.phase = next_phase;
            (
                state.generation,
                transition.assistant_reply,
                transition.submit,
            )
        };

        if submit {
            self.fire_submission().await;
        }
        if let Some(reply) = reply {
            announcer::paced_append(&self.state, &self.pacing, generation, &reply).await;
        }
        CommandOutcome::Accepted
    }

    /// Fire-and-continue: the dispatcher runs in the background and its
    /// outcome (logged and notified inside) never blocks completion.
    async fn fire_submission(&self) {
        let lead = {
            let mut state = self.state.lock().await;
            if state.submission_fired {
                return;
            }
            state.submission_fired = true;
            state.conversation.lead.clone()
        };
        let dispatcher = Arc::clone(&self.dispatcher);
        tokio::spawn(async move {
            dispatcher.submit(&lead).await;
        });
    }

    fn spawn_script_run(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let pacing = self.pacing;
        let script = self.script.clone();
        tokio::spawn(async move {
            announcer::play(&state, &pacing, generation, &script).await;
        });
    }
}
