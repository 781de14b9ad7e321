//! Persona selection over the mood profile.

use zenith_types::{MoodProfile, Persona, SessionType};

/// Chooses the coaching persona for a profile.
///
/// Deterministic priority order, first match wins:
///
/// 1. preferred session is visualization → [`Persona::VisualizationCoach`]
/// 2. needs contain "focus" or "calm" → [`Persona::Therapist`]
/// 3. needs contain "energy" → [`Persona::MotivationalCoach`]
/// 4. any other signal present → [`Persona::MeditationCoach`]
/// 5. no signal at all → [`Persona::GeneralZenMaster`]
pub fn select_persona(profile: &MoodProfile) -> Persona {
    if profile.preferred_session == SessionType::Visualization {
        Persona::VisualizationCoach
    } else if profile.has_need("focus") || profile.has_need("calm") {
        Persona::Therapist
    } else if profile.has_need("energy") {
        Persona::MotivationalCoach
    } else if !profile.is_empty() {
        Persona::MeditationCoach
    } else {
        Persona::GeneralZenMaster
    }
}
