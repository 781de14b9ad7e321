//! ElevenLabs speech synthesis client.

use crate::error::ProviderError;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const MODEL_ID: &str = "eleven_monolingual_v1";
const STABILITY: f32 = 0.5;
const SIMILARITY_BOOST: f32 = 0.5;

/// Text-to-speech via the ElevenLabs API.
///
/// Synthesis failures are surfaced to the caller; this client never
/// substitutes placeholder audio.
pub struct SpeechClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SpeechClient {
    /// Creates a client. An empty `api_key` marks it unconfigured; the
    /// orchestrator then skips synthesis and returns the resolved voice
    /// id instead of an artifact path.
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests against a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns true when the client has a usable credential.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Synthesizes `text` with the given voice, returning MP3 bytes.
    pub async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::Config(
                "elevenlabs API key is not set".to_string(),
            ));
        }

        let body = json!({
            "text": text,
            "model_id": MODEL_ID,
            "voice_settings": {
                "stability": STABILITY,
                "similarity_boost": SIMILARITY_BOOST
            }
        });

        let response = self
            .client
            .post(format!("{}/v1/text-to-speech/{}", self.base_url, voice_id))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "elevenlabs returned {}",
                status
            )));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(ProviderError::Malformed(
                "elevenlabs returned an empty audio body".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }
}
