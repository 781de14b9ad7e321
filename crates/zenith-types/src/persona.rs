//! The coaching persona used to frame generated session text.

use serde::{Deserialize, Serialize};

/// The coaching voice/role that steers prompt construction.
///
/// One persona is chosen per request by a deterministic priority rule
/// over the [`crate::MoodProfile`]; see `zenith-agents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    /// Default coach for any profile that carries some signal.
    MeditationCoach,
    /// Chosen when the user prefers a visualization session.
    VisualizationCoach,
    /// Chosen for focus or calm needs.
    Therapist,
    /// Chosen for energy needs.
    MotivationalCoach,
    /// Chosen when the profile carries no signal at all.
    GeneralZenMaster,
}

impl Persona {
    /// Human-readable title, used in prompt framing and fallback text.
    pub fn title(self) -> &'static str {
        match self {
            Self::MeditationCoach => "Meditation Coach",
            Self::VisualizationCoach => "Visualization Coach",
            Self::Therapist => "Therapist",
            Self::MotivationalCoach => "Motivational Coach",
            Self::GeneralZenMaster => "General Zen Master",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
