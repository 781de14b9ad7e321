//! Zenith server library logic.

pub mod api;
pub mod api_feedback;
pub mod api_quiz;
pub mod api_session;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use zenith_memory::FeedbackLog;
use zenith_session::SessionOrchestrator;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The session pipeline over the injected providers.
    pub orchestrator: Arc<SessionOrchestrator>,
    /// The append-only feedback log.
    pub feedback: Arc<FeedbackLog>,
}

/// Maximum request body size (2 MiB). Protects against OOM from oversized payloads.
const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Root greeting handler.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Zenith guided session API"
    }))
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/meditate", post(api_session::meditate_handler))
        .route("/visualize", post(api_session::visualize_handler))
        .route(
            "/feedback",
            post(api_feedback::submit_feedback_handler).get(api_feedback::list_feedback_handler),
        )
        .route("/quiz", get(api_quiz::quiz_questions_handler))
        .route("/quiz/", get(api_quiz::quiz_questions_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
