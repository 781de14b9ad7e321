//! Feedback API handlers.

use crate::{api::ApiError, AppState};
use axum::{extract::Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zenith_types::FeedbackRecord;

/// Request body for `POST /feedback`.
///
/// The reference clients send the text under either `feedback` or
/// `user_input`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// The session this feedback refers to.
    pub session_id: String,
    /// The user's free-text feedback.
    #[serde(alias = "user_input")]
    pub feedback: String,
    /// Optional 1-5 rating.
    #[serde(default)]
    pub rating: Option<i32>,
}

/// Response body for `POST /feedback`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub status: String,
    pub message: String,
}

/// Handler for `POST /feedback`.
pub async fn submit_feedback_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<SubmitFeedbackRequest>,
) -> Result<Json<SubmitFeedbackResponse>, ApiError> {
    let record = FeedbackRecord {
        session_id: payload.session_id,
        feedback: payload.feedback,
        rating: payload.rating,
        timestamp: Utc::now(),
    };

    let log = state.feedback.clone();
    tokio::task::spawn_blocking(move || log.append(&record))
        .await
        .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))?
        .map_err(|e| {
            tracing::error!("feedback append failed: {}", e);
            ApiError::InternalServerError("failed to record feedback".to_string())
        })?;

    Ok(Json(SubmitFeedbackResponse {
        status: "ok".to_string(),
        message: "Thank you for your feedback!".to_string(),
    }))
}

/// Response body for `GET /feedback`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListFeedbackResponse {
    /// Every recorded entry, in insertion order.
    pub entries: Vec<FeedbackRecord>,
    /// The number of entries returned.
    pub count: usize,
}

/// Handler for `GET /feedback`.
///
/// A malformed log line degrades to the records parsed before it; the
/// endpoint itself never fails for that.
pub async fn list_feedback_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ListFeedbackResponse>, ApiError> {
    let log = state.feedback.clone();
    let entries = tokio::task::spawn_blocking(move || log.read_all())
        .await
        .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))?
        .map_err(|e| {
            tracing::error!("feedback read failed: {}", e);
            ApiError::InternalServerError("failed to read feedback".to_string())
        })?;

    let count = entries.len();
    Ok(Json(ListFeedbackResponse { entries, count }))
}
