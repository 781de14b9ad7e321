//! Meditation and visualization API handlers.

use crate::{api::ApiError, AppState};
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zenith_types::SessionRequest;

/// Request body for `POST /meditate`.
#[derive(Debug, Deserialize)]
pub struct MeditateRequest {
    /// Free-text description of how the user is doing.
    pub user_input: String,
    /// One free-text answer per quiz question.
    pub quiz_answers: Vec<String>,
    /// Free-text voice preference.
    pub voice_pref: String,
    /// Free-text music style preference; empty means "infer".
    pub music_pref: String,
}

/// Response body for `POST /meditate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeditateResponse {
    /// The generated (or fallback) session script. Never empty.
    pub meditation_text: String,
    /// Speech artifact path, or the resolved voice id.
    pub voice_output: String,
    /// Music artifact path, or the resolved style tag.
    pub music_output: String,
}

/// Handler for `POST /meditate`.
pub async fn meditate_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<MeditateRequest>,
) -> Result<Json<MeditateResponse>, ApiError> {
    let session_id = uuid::Uuid::new_v4();
    tracing::info!(
        %session_id,
        answers = payload.quiz_answers.len(),
        "meditation session requested"
    );

    let request = SessionRequest {
        user_input: payload.user_input,
        quiz_answers: payload.quiz_answers,
        voice_pref: payload.voice_pref,
        music_pref: payload.music_pref,
    };

    let result = state.orchestrator.run(&request).await.map_err(|e| {
        tracing::error!(%session_id, "session pipeline failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(MeditateResponse {
        meditation_text: result.meditation_text,
        voice_output: result.voice_output,
        music_output: result.music_output,
    }))
}

/// Request body for `POST /visualize`.
#[derive(Debug, Deserialize)]
pub struct VisualizeRequest {
    /// What the user wants to picture achieving.
    pub user_goal: String,
    /// Free-text description of how the user is doing.
    pub user_input: String,
}

/// Response body for `POST /visualize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VisualizeResponse {
    /// The generated (or fallback) visualization text. Never empty.
    pub visualization_text: String,
}

/// Handler for `POST /visualize`.
///
/// Cannot fail: the single text stage carries its own fallback.
pub async fn visualize_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<VisualizeRequest>,
) -> Json<VisualizeResponse> {
    tracing::info!(goal_chars = payload.user_goal.len(), "visualization requested");

    let visualization_text = state
        .orchestrator
        .visualize(&payload.user_goal, &payload.user_input)
        .await;

    Json(VisualizeResponse { visualization_text })
}
