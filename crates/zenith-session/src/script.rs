//! Script generation with the never-empty fallback policy.

use zenith_agents::build_prompt;
use zenith_providers::{ProviderError, TextGenerator};
use zenith_types::{MoodProfile, Persona};

/// Builds the persona-flavored fallback sentence.
///
/// Used whenever the text provider fails or returns an empty script;
/// the session must still read as a session, not as an error page.
pub fn fallback_script(persona: Persona) -> String {
    format!(
        "As your {}, I invite you to take a moment for yourself. \
         Breathe in, and out. Let this time be for you.",
        persona.title()
    )
}

/// Generates the guided-session script for a persona and profile.
///
/// Never fails and never returns an empty string: any provider error,
/// or an empty/whitespace-only reply, substitutes the fallback. A
/// missing credential is reported at warn level, outages and malformed
/// payloads at info level; the caller sees the same soothing text
/// either way.
pub async fn generate_script(
    provider: &dyn TextGenerator,
    persona: Persona,
    profile: &MoodProfile,
) -> String {
    let prompt = build_prompt(persona, profile);

    match provider.generate(&prompt.system, &prompt.user).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::info!(
                provider = provider.name(),
                persona = persona.title(),
                "text provider returned a blank script, using fallback"
            );
            fallback_script(persona)
        }
        Err(ProviderError::Config(msg)) => {
            tracing::warn!(
                provider = provider.name(),
                persona = persona.title(),
                "text provider credential misconfigured, using fallback: {}",
                msg
            );
            fallback_script(persona)
        }
        Err(e) => {
            tracing::info!(
                provider = provider.name(),
                persona = persona.title(),
                "text provider failed, using fallback: {}",
                e
            );
            fallback_script(persona)
        }
    }
}

/// Generates the visualization text for the sibling pipeline.
///
/// Single text-generation stage with the Visualization Coach persona;
/// same fallback policy as the meditation script.
pub async fn generate_visualization(
    provider: &dyn TextGenerator,
    user_goal: &str,
    user_input: &str,
) -> String {
    let persona = Persona::VisualizationCoach;
    let system = format!(
        "You are a compassionate and experienced {}. Create a guided \
         visualization of 3-4 paragraphs that helps the user vividly picture \
         reaching their goal. It should be soothing and easy to follow. Do not \
         include any sign-offs or introductory phrases. Just provide the \
         visualization text itself.",
        persona.title()
    );
    let user = format!(
        "The user's goal is: {}. About how they feel right now: {}. \
         Please create a guided visualization for them.",
        user_goal, user_input
    );

    match provider.generate(&system, &user).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::info!(
                provider = provider.name(),
                "text provider returned a blank visualization, using fallback"
            );
            fallback_script(persona)
        }
        Err(e) => {
            tracing::info!(
                provider = provider.name(),
                "text provider failed for visualization, using fallback: {}",
                e
            );
            fallback_script(persona)
        }
    }
}
