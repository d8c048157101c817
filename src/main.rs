use std::sync::Arc;

use tokio::net::TcpListener;

use redshark_quiz::application::services::{ConversationService, Pacing, SubmissionDispatcher};
use redshark_quiz::infrastructure::http::WebhookGateway;
use redshark_quiz::infrastructure::notify::TracingNotifier;
use redshark_quiz::infrastructure::observability::{init_tracing, TracingConfig};
use redshark_quiz::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let gateway = Arc::new(WebhookGateway::new(settings.webhook.url.clone()));
    let notifier = Arc::new(TracingNotifier);
    let dispatcher = Arc::new(SubmissionDispatcher::new(
        gateway,
        notifier,
        settings.webhook.source.clone(),
    ));
    let pacing = Pacing::from_millis(
        settings.pacing.composing_delay_ms,
        settings.pacing.inter_message_delay_ms,
    );
    let conversation = Arc::new(ConversationService::new(dispatcher, pacing));

    let state = AppState {
        conversation,
        follow_up_url: settings.follow_up.group_invite_url.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
