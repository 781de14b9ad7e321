//! Quiz API handlers.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

/// The fixed question set every session starts from.
const QUIZ_QUESTIONS: &[&str] = &[
    "How are you feeling generally today? (e.g., anxious, tired, happy, sad)",
    "What kind of meditation or mindfulness session do you prefer? (e.g., visualization, breathing, affirmation)",
    "What do you hope to gain from this session? (e.g., calm, focus, motivation)",
];

/// Query parameters for `GET /quiz`.
#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    /// The user's opening message. Accepted for interface stability;
    /// the current question set is fixed.
    #[serde(default)]
    pub user_message: String,
}

/// Response body for `GET /quiz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz_questions: Vec<String>,
}

/// Handler for `GET /quiz` and `GET /quiz/`.
pub async fn quiz_questions_handler(Query(params): Query<QuizQuery>) -> Json<QuizResponse> {
    tracing::debug!(message_chars = params.user_message.len(), "quiz questions requested");
    Json(QuizResponse {
        quiz_questions: QUIZ_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
