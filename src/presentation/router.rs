use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Notifier, SubmissionGateway};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    conversation_view_handler, health_handler, message_handler, quick_reply_handler,
    reset_handler, start_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G, N>(state: AppState<G, N>) -> Router
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/conversation", get(conversation_view_handler::<G, N>))
        .route("/api/v1/conversation/start", post(start_handler::<G, N>))
        .route(
            "/api/v1/conversation/quick-reply",
            post(quick_reply_handler::<G, N>),
        )
        .route(
            "/api/v1/conversation/message",
            post(message_handler::<G, N>),
        )
        .route("/api/v1/conversation/reset", post(reset_handler::<G, N>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
