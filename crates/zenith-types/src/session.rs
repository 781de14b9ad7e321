//! Session request/result pair and the feedback record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The external input for one guided session.
///
/// Built at the HTTP boundary and owned by the orchestrator for the
/// lifetime of one request. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Free-text description of how the user is doing.
    pub user_input: String,
    /// One free-text answer per quiz question, in question order.
    pub quiz_answers: Vec<String>,
    /// Free-text voice preference ("rachel", "a deep male voice", ...).
    pub voice_pref: String,
    /// Free-text music style preference; empty means "infer from needs".
    pub music_pref: String,
}

/// The assembled output of one session.
///
/// `meditation_text` is never empty: script-generation failures are
/// absorbed by a persona-flavored fallback before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// The generated (or fallback) guided-session script.
    pub meditation_text: String,
    /// Path to the synthesized speech artifact, or the resolved voice id
    /// when speech synthesis is not configured.
    pub voice_output: String,
    /// Path to the generated music artifact, or the resolved style tag
    /// when music generation is not configured.
    pub music_output: String,
}

/// One appended feedback entry. Identity is insertion order; records
/// are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// The session this feedback refers to.
    pub session_id: String,
    /// The user's free-text feedback.
    pub feedback: String,
    /// Optional 1-5 rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    /// When the record was appended.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_record_roundtrips_through_json() {
        let record = FeedbackRecord {
            session_id: "s-1".to_string(),
            feedback: "very calming".to_string(),
            rating: Some(5),
            timestamp: Utc::now(),
        };
        let line = serde_json::to_string(&record).unwrap();
        let back: FeedbackRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn feedback_record_rating_is_optional() {
        let line = r#"{"session_id":"s-2","feedback":"ok","timestamp":"2025-06-01T00:00:00Z"}"#;
        let record: FeedbackRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.rating, None);
        // Absent rating stays absent on the wire.
        let back = serde_json::to_string(&record).unwrap();
        assert!(!back.contains("rating"));
    }
}
