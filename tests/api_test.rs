use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use redshark_quiz::application::ports::{
    LeadSubmission, Notifier, SubmissionGateway, SubmissionGatewayError,
};
use redshark_quiz::application::services::{
    ConversationService, Pacing, SubmissionDispatcher,
};
use redshark_quiz::presentation::{create_router, AppState};

const TEST_GROUP_URL: &str = "https://chat.whatsapp.com/test-group";

struct AcceptingGateway;

#[async_trait::async_trait]
impl SubmissionGateway for AcceptingGateway {
    async fn submit(&self, _submission: &LeadSubmission) -> Result<(), SubmissionGatewayError> {
        Ok(())
    }
}

struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify_success(&self, _message: &str) {}
    fn notify_failure(&self, _message: &str) {}
}

fn build_router() -> Router {
    let gateway = Arc::new(AcceptingGateway);
    let notifier = Arc::new(NoopNotifier);
    let dispatcher = Arc::new(SubmissionDispatcher::new(
        gateway,
        notifier,
        "Quiz Redshark".to_string(),
    ));
    let conversation = Arc::new(ConversationService::new(dispatcher, Pacing::default()));
    create_router(AppState {
        conversation,
        follow_up_url: TEST_GROUP_URL.to_string(),
    })
}

async fn settle() {
    tokio::time::sleep(Duration::from_secs(30)).await;
}

async fn get_view(router: &Router) -> Value {
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/conversation")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post(router: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::post(uri).body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn given_running_service_when_health_is_queried_then_it_reports_healthy() {
    let router = build_router();

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test(start_paused = true)]
async fn given_start_command_when_script_settles_then_view_offers_the_quick_replies() {
    let router = build_router();

    let (status, _) = post(&router, "/api/v1/conversation/start", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    settle().await;

    let view = get_view(&router).await;
    assert_eq!(view["entries"].as_array().unwrap().len(), 4);
    assert_eq!(view["phase"], "awaiting-qualifier");
    assert_eq!(view["awaiting_quick_reply"], true);
    assert_eq!(view["quick_replies"], json!(["SIM", "NÃO"]));
    assert!(view.get("follow_up_url").is_none());
}

#[tokio::test(start_paused = true)]
async fn given_invalid_quick_reply_then_the_command_is_unprocessable() {
    let router = build_router();
    post(&router, "/api/v1/conversation/start", None).await;
    settle().await;

    let (status, body) = post(
        &router,
        "/api/v1/conversation/quick-reply",
        Some(json!({ "value": "TALVEZ" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["accepted"], false);
    assert_eq!(body["rejection"], "invalid quick reply");
}

#[tokio::test(start_paused = true)]
async fn given_blank_message_while_collecting_name_then_the_command_is_unprocessable() {
    let router = build_router();
    post(&router, "/api/v1/conversation/start", None).await;
    settle().await;
    let (status, _) = post(
        &router,
        "/api/v1/conversation/quick-reply",
        Some(json!({ "value": "SIM" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &router,
        "/api/v1/conversation/message",
        Some(json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["rejection"], "empty input");
}

#[tokio::test(start_paused = true)]
async fn given_full_flow_over_http_then_view_completes_with_the_follow_up_link() {
    let router = build_router();
    post(&router, "/api/v1/conversation/start", None).await;
    settle().await;

    post(
        &router,
        "/api/v1/conversation/quick-reply",
        Some(json!({ "value": "SIM" })),
    )
    .await;
    for text in ["Ana Silva", "+55 11 99999-0000", "ana@example.com"] {
        let (status, body) = post(
            &router,
            "/api/v1/conversation/message",
            Some(json!({ "text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "message {:?} rejected: {}", text, body);
    }
    settle().await;

    let view = get_view(&router).await;
    assert_eq!(view["phase"], "completed");
    assert_eq!(view["entries"].as_array().unwrap().len(), 12);
    assert_eq!(view["follow_up_url"], TEST_GROUP_URL);
    assert!(view.get("quick_replies").is_none());
}

#[tokio::test(start_paused = true)]
async fn given_completed_conversation_when_reset_then_a_fresh_opening_plays() {
    let router = build_router();
    post(&router, "/api/v1/conversation/start", None).await;
    settle().await;
    post(
        &router,
        "/api/v1/conversation/quick-reply",
        Some(json!({ "value": "NÃO" })),
    )
    .await;

    let (status, _) = post(&router, "/api/v1/conversation/reset", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    settle().await;

    let view = get_view(&router).await;
    assert_eq!(view["entries"].as_array().unwrap().len(), 4);
    assert_eq!(view["phase"], "awaiting-qualifier");
    assert!(view.get("follow_up_url").is_none());
}
