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
use zenith_server::{api_session::MeditateResponse, app, AppState};
use zenith_session::SessionOrchestrator;

struct StaticProvider(&'static str);

#[async_trait]
impl TextGenerator for StaticProvider {
    fn name(&self) -> &'static str {
        "static"
    }
    fn is_configured(&self) -> bool {
        true
    }
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

struct FailingProvider;

#[async_trait]
impl TextGenerator for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }
    fn is_configured(&self) -> bool {
        true
    }
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Unavailable("connection refused".to_string()))
    }
}

fn test_app(text: Arc<dyn TextGenerator>, dir: &tempfile::TempDir) -> axum::Router {
    let client = reqwest::Client::new();
    let state = AppState {
        orchestrator: Arc::new(SessionOrchestrator::new(
            text,
            // Empty keys: synthesis degrades to id/style passthrough.
            SpeechClient::new(client.clone(), String::new()),
            MusicClient::new(client, String::new(), "http://localhost:0".to_string()),
            ArtifactStore::new(dir.path().join("audio_output")),
        )),
        feedback: Arc::new(FeedbackLog::new(dir.path().join("feedback.jsonl"))),
    };
    app(state)
}

fn scenario_a_body() -> String {
    serde_json::json!({
        "user_input": "Help me unwind after work",
        "quiz_answers": ["Anxious", "Work", "Inner peace", "Clarity"],
        "voice_pref": "alloy",
        "music_pref": "Calm"
    })
    .to_string()
}

#[tokio::test]
async fn meditate_scenario_a_resolves_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Arc::new(StaticProvider("Settle in and breathe.")), &dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/meditate")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(scenario_a_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: MeditateResponse = serde_json::from_slice(&body).unwrap();

    assert!(!resp.meditation_text.trim().is_empty());
    // "alloy" matches no table entry, so the default ("rachel") id.
    assert_eq!(resp.voice_output, "21m00Tcm4TlvDq8ikWAM");
    // Non-empty music preference is passed through verbatim.
    assert_eq!(resp.music_output, "Calm");
}

#[tokio::test]
async fn meditate_provider_outage_returns_persona_framed_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Arc::new(FailingProvider), &dir);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/meditate")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(scenario_a_body()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Script failure is absorbed: still a usable 200.
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: MeditateResponse = serde_json::from_slice(&body).unwrap();

    // Scenario-A needs (calm + focus) select the Therapist persona.
    assert!(resp.meditation_text.contains("Therapist"));
    assert!(!resp.meditation_text.trim().is_empty());
}

#[tokio::test]
async fn meditate_with_empty_quiz_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Arc::new(FailingProvider), &dir);

    let body = serde_json::json!({
        "user_input": "",
        "quiz_answers": [],
        "voice_pref": "",
        "music_pref": ""
    })
    .to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/meditate")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: MeditateResponse = serde_json::from_slice(&bytes).unwrap();

    // No signal at all selects the General Zen Master persona.
    assert!(resp.meditation_text.contains("General Zen Master"));
    assert_eq!(resp.music_output, "instrumental");
}

#[tokio::test]
async fn meditate_rejects_malformed_body_before_pipeline_runs() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(Arc::new(StaticProvider("unused")), &dir);

    // quiz_answers has the wrong type.
    let body = serde_json::json!({
        "user_input": "hi",
        "quiz_answers": "not-a-list",
        "voice_pref": "",
        "music_pref": ""
    })
    .to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/meditate")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
