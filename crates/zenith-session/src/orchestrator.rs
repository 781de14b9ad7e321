//! The session pipeline.

use crate::error::SessionError;
use crate::script::{generate_script, generate_visualization};
use std::sync::Arc;
use zenith_agents::{analyze, select_music_style, select_persona, select_voice};
use zenith_providers::{ArtifactKind, ArtifactStore, MusicClient, SpeechClient, TextGenerator};
use zenith_types::{SessionRequest, SessionResult};

/// Sequences one guided session end to end.
///
/// Holds the injected provider clients; constructed once at startup and
/// shared across requests behind an `Arc`. The orchestrator itself has
/// no mutable state, so concurrent requests only share the providers'
/// own connection pools.
pub struct SessionOrchestrator {
    text: Arc<dyn TextGenerator>,
    speech: SpeechClient,
    music: MusicClient,
    artifacts: ArtifactStore,
}

impl SessionOrchestrator {
    /// Creates an orchestrator over the given providers.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        speech: SpeechClient,
        music: MusicClient,
        artifacts: ArtifactStore,
    ) -> Self {
        Self {
            text,
            speech,
            music,
            artifacts,
        }
    }

    /// Runs the full meditation pipeline for one request.
    ///
    /// Stage order: analyze → select persona → generate script →
    /// resolve voice/music preferences → synthesize artifacts →
    /// assemble. Script generation cannot fail (fallback text); the
    /// two synthesis branches run concurrently and the result is
    /// assembled only after both settle.
    pub async fn run(&self, request: &SessionRequest) -> Result<SessionResult, SessionError> {
        let profile = analyze(&request.quiz_answers);
        tracing::debug!(
            stage = "analyzed",
            mood_tags = ?profile.mood_tags,
            needs = ?profile.needs,
            session = profile.preferred_session.label(),
            "quiz answers analyzed"
        );

        let persona = select_persona(&profile);
        tracing::debug!(stage = "persona_selected", persona = persona.title(), "persona selected");

        let script = generate_script(self.text.as_ref(), persona, &profile).await;
        tracing::debug!(stage = "script_ready", chars = script.len(), "script ready");

        // Voice and music resolution are pure and independent.
        let voice_id = select_voice(&request.voice_pref);
        let music_style = select_music_style(&request.music_pref, &profile.needs);
        tracing::debug!(
            stage = "preferences_resolved",
            voice_id,
            music_style,
            "preferences resolved"
        );

        let (voice_result, music_result) = tokio::join!(
            self.synthesize_speech(&script, voice_id),
            self.synthesize_music(&music_style),
        );

        let (voice_output, music_output) = match (voice_result, music_result) {
            (Ok(voice), Ok(music)) => (voice, music),
            (Ok(voice), Err(e)) => {
                tracing::warn!(
                    stage = "artifacts_synthesized",
                    sibling = %voice,
                    "music generation failed after speech output was produced: {}",
                    e
                );
                return Err(e);
            }
            (Err(e), Ok(music)) => {
                tracing::warn!(
                    stage = "artifacts_synthesized",
                    sibling = %music,
                    "speech synthesis failed after music output was produced: {}",
                    e
                );
                return Err(e);
            }
            (Err(e), Err(music_err)) => {
                tracing::warn!(
                    stage = "artifacts_synthesized",
                    "both synthesis branches failed; music error: {}",
                    music_err
                );
                return Err(e);
            }
        };

        tracing::info!(
            stage = "completed",
            persona = persona.title(),
            voice_output = %voice_output,
            music_output = %music_output,
            "session assembled"
        );

        Ok(SessionResult {
            meditation_text: script,
            voice_output,
            music_output,
        })
    }

    /// Runs the single-stage visualization sibling pipeline.
    ///
    /// No voice or music: the result is text only, with the same
    /// fallback policy as the meditation script.
    pub async fn visualize(&self, user_goal: &str, user_input: &str) -> String {
        let text = generate_visualization(self.text.as_ref(), user_goal, user_input).await;
        tracing::debug!(stage = "completed", chars = text.len(), "visualization ready");
        text
    }

    /// Speech branch: synthesize and persist, or degrade to the voice
    /// id when the provider is unconfigured.
    async fn synthesize_speech(&self, script: &str, voice_id: &str) -> Result<String, SessionError> {
        if !self.speech.is_configured() {
            tracing::debug!(voice_id, "speech synthesis unconfigured, returning voice id");
            return Ok(voice_id.to_string());
        }

        let audio = self
            .speech
            .synthesize(script, voice_id)
            .await
            .map_err(SessionError::Speech)?;
        let path = self.artifacts.write(ArtifactKind::Voice, &audio).await?;
        Ok(path.display().to_string())
    }

    /// Music branch: generate and persist, or degrade to the style tag
    /// when the provider is unconfigured.
    async fn synthesize_music(&self, style: &str) -> Result<String, SessionError> {
        if !self.music.is_configured() {
            tracing::debug!(style, "music generation unconfigured, returning style tag");
            return Ok(style.to_string());
        }

        let audio = self.music.generate(style).await.map_err(SessionError::Music)?;
        let path = self.artifacts.write(ArtifactKind::Music, &audio).await?;
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use zenith_providers::ProviderError;

    struct StaticProvider(&'static str);

    #[async_trait]
    impl TextGenerator for StaticProvider {
        fn name(&self) -> &'static str {
            "static"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextGenerator for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Unavailable("503".to_string()))
        }
    }

    fn orchestrator(text: Arc<dyn TextGenerator>) -> SessionOrchestrator {
        // Empty keys: both synthesis branches degrade to id/style.
        let client = reqwest::Client::new();
        SessionOrchestrator::new(
            text,
            SpeechClient::new(client.clone(), String::new()),
            MusicClient::new(client, String::new(), "http://localhost:0".to_string()),
            ArtifactStore::new(std::env::temp_dir().join("zenith-test-artifacts")),
        )
    }

    fn scenario_a_request() -> SessionRequest {
        SessionRequest {
            user_input: "Help me unwind".to_string(),
            quiz_answers: ["Anxious", "Work", "Inner peace", "Clarity"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            voice_pref: "alloy".to_string(),
            music_pref: "Calm".to_string(),
        }
    }

    #[tokio::test]
    async fn pipeline_resolves_preferences_and_passes_music_verbatim() {
        let orch = orchestrator(Arc::new(StaticProvider("Settle into your chair.")));
        let result = orch.run(&scenario_a_request()).await.unwrap();

        assert_eq!(result.meditation_text, "Settle into your chair.");
        // "alloy" matches nothing in the table, so the default voice id.
        assert_eq!(result.voice_output, "21m00Tcm4TlvDq8ikWAM");
        // Non-empty preference is trusted verbatim.
        assert_eq!(result.music_output, "Calm");
    }

    #[tokio::test]
    async fn provider_outage_still_yields_persona_framed_text() {
        let orch = orchestrator(Arc::new(FailingProvider));
        let result = orch.run(&scenario_a_request()).await.unwrap();

        // Scenario A needs contain calm+focus, so the persona is Therapist.
        assert!(result.meditation_text.contains("Therapist"));
        assert!(!result.meditation_text.trim().is_empty());
    }

    #[tokio::test]
    async fn empty_quiz_infers_music_from_defaults() {
        let orch = orchestrator(Arc::new(StaticProvider("Breathe.")));
        let request = SessionRequest {
            user_input: String::new(),
            quiz_answers: Vec::new(),
            voice_pref: String::new(),
            music_pref: String::new(),
        };
        let result = orch.run(&request).await.unwrap();
        assert_eq!(result.music_output, "instrumental");
    }

    #[tokio::test]
    async fn visualization_pipeline_falls_back_on_outage() {
        let orch = orchestrator(Arc::new(FailingProvider));
        let text = orch.visualize("run a marathon", "I feel stuck").await;
        assert!(text.contains("Visualization Coach"));
    }
}
