//! The mood profile derived from a user's quiz answers.

use serde::{Deserialize, Serialize};

/// The kind of guided session the user prefers.
///
/// Derived from quiz answers; unknown or absent input maps to
/// [`SessionType::Meditation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Classic guided meditation.
    #[default]
    Meditation,
    /// Goal-oriented guided visualization.
    Visualization,
    /// Breathing exercise.
    Breathing,
    /// Affirmation session.
    Affirmation,
}

impl SessionType {
    /// Returns the lowercase label used in prompts and wire payloads.
    pub fn label(self) -> &'static str {
        match self {
            Self::Meditation => "meditation",
            Self::Visualization => "visualization",
            Self::Breathing => "breathing",
            Self::Affirmation => "affirmation",
        }
    }
}

/// Structured mood profile produced by the analyzer.
///
/// Built once per request and immutable thereafter. Tag vectors keep
/// insertion order and contain no duplicates, so downstream selection
/// is deterministic for a given answer sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoodProfile {
    /// Free-text mood tags recognized in the answers (e.g. "anxious").
    pub mood_tags: Vec<String>,
    /// The session type the user leans toward.
    pub preferred_session: SessionType,
    /// What the user hopes to get out of the session
    /// (e.g. "calm", "rest", "focus", "energy").
    pub needs: Vec<String>,
}

impl MoodProfile {
    /// Returns true when the profile carries no signal at all:
    /// no mood tags, no needs, and the default session type.
    pub fn is_empty(&self) -> bool {
        self.mood_tags.is_empty()
            && self.needs.is_empty()
            && self.preferred_session == SessionType::default()
    }

    /// Returns true when `need` appears in the needs list.
    pub fn has_need(&self, need: &str) -> bool {
        self.needs.iter().any(|n| n == need)
    }
}
