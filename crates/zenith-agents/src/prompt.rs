//! Prompt construction for script generation.

use zenith_types::{MoodProfile, Persona};

/// The system/user instruction pair sent to a text-generation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Persona framing and style constraints.
    pub system: String,
    /// The user's mood, needs, and requested session type.
    pub user: String,
}

/// Builds the instruction pair for a guided-session script.
///
/// The system instruction frames the persona and pins the output style:
/// 3-4 paragraphs, soothing, no meta-commentary or sign-offs. The user
/// instruction carries the analyzed profile.
pub fn build_prompt(persona: Persona, profile: &MoodProfile) -> Prompt {
    let system = format!(
        "You are a compassionate and experienced {}. Your task is to create a \
         personalized, guided {} script. The script should be approximately 3-4 \
         paragraphs long. It should be soothing, easy to follow, and directly \
         address the user's feelings and needs. Start with a welcoming \
         introduction, guide them through the main exercise, and end with a \
         gentle, positive conclusion. Do not include any sign-offs or \
         introductory phrases like 'Here is the script'. Just provide the \
         session text itself.",
        persona.title(),
        profile.preferred_session.label(),
    );

    let mood = join_or(&profile.mood_tags, "neutral");
    let needs = join_or(&profile.needs, "general wellbeing");
    let user = format!(
        "The user is feeling {} and has expressed needs for {}. \
         Please create a guided {} for them.",
        mood,
        needs,
        profile.preferred_session.label(),
    );

    Prompt { system, user }
}

fn join_or(tags: &[String], fallback: &str) -> String {
    if tags.is_empty() {
        fallback.to_string()
    } else {
        tags.join(", ")
    }
}
