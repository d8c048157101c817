use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{Notifier, SubmissionGateway};
use crate::application::services::CommandOutcome;
use crate::presentation::state::AppState;

use super::views::{CommandResponse, ConversationView, MessageRequest, QuickReplyRequest};

pub async fn conversation_view_handler<G, N>(
    State(state): State<AppState<G, N>>,
) -> impl IntoResponse
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    let snapshot = state.conversation.snapshot().await;
    Json(ConversationView::render(&snapshot, &state.follow_up_url))
}

pub async fn start_handler<G, N>(State(state): State<AppState<G, N>>) -> impl IntoResponse
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    state.conversation.start().await;
    StatusCode::ACCEPTED
}

pub async fn reset_handler<G, N>(State(state): State<AppState<G, N>>) -> impl IntoResponse
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    state.conversation.reset().await;
    StatusCode::ACCEPTED
}

pub async fn quick_reply_handler<G, N>(
    State(state): State<AppState<G, N>>,
    Json(request): Json<QuickReplyRequest>,
) -> impl IntoResponse
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    let outcome = state.conversation.submit_quick_reply(&request.value).await;
    command_response(outcome)
}

pub async fn message_handler<G, N>(
    State(state): State<AppState<G, N>>,
    Json(request): Json<MessageRequest>,
) -> impl IntoResponse
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    let outcome = state.conversation.submit_free_text(&request.text).await;
    command_response(outcome)
}

fn command_response(outcome: CommandOutcome) -> (StatusCode, Json<CommandResponse>) {
    let status = if outcome.is_accepted() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(CommandResponse::from(outcome)))
}
