use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use zenith_memory::FeedbackLog;
use zenith_providers::{
    ArtifactStore, MusicClient, ProviderError, SpeechClient, TextGenerator,
};
use zenith_server::{api_feedback::ListFeedbackResponse, app, AppState};
use zenith_session::SessionOrchestrator;

struct StubProvider;

#[async_trait]
impl TextGenerator for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }
    fn is_configured(&self) -> bool {
        false
    }
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Config("stub".to_string()))
    }
}

fn test_app(dir: &tempfile::TempDir) -> axum::Router {
    let client = reqwest::Client::new();
    let state = AppState {
        orchestrator: Arc::new(SessionOrchestrator::new(
            Arc::new(StubProvider),
            SpeechClient::new(client.clone(), String::new()),
            MusicClient::new(client, String::new(), "http://localhost:0".to_string()),
            ArtifactStore::new(dir.path().join("audio_output")),
        )),
        feedback: Arc::new(FeedbackLog::new(dir.path().join("feedback.jsonl"))),
    };
    app(state)
}

async fn submit(app: &axum::Router, body: serde_json::Value) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/feedback")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

async fn list(app: &axum::Router) -> ListFeedbackResponse {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/feedback")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn feedback_round_trip_preserves_count_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    for n in 0..5 {
        let status = submit(
            &app,
            serde_json::json!({
                "session_id": format!("session-{}", n),
                "feedback": format!("note {}", n),
                "rating": 4
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let resp = list(&app).await;
    assert_eq!(resp.count, 5);
    for (n, entry) in resp.entries.iter().enumerate() {
        assert_eq!(entry.session_id, format!("session-{}", n));
        assert_eq!(entry.feedback, format!("note {}", n));
        assert_eq!(entry.rating, Some(4));
    }
}

#[tokio::test]
async fn feedback_accepts_user_input_alias_and_missing_rating() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let status = submit(
        &app,
        serde_json::json!({
            "session_id": "s-1",
            "user_input": "loved the pacing"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let resp = list(&app).await;
    assert_eq!(resp.count, 1);
    assert_eq!(resp.entries[0].feedback, "loved the pacing");
    assert_eq!(resp.entries[0].rating, None);
}

#[tokio::test]
async fn feedback_rejects_body_without_session_id() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let status = submit(&app, serde_json::json!({ "feedback": "no session" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn feedback_list_is_empty_before_first_submission() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let resp = list(&app).await;
    assert_eq!(resp.count, 0);
    assert!(resp.entries.is_empty());
}
