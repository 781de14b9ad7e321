//! Music generation client.

use crate::error::ProviderError;
use serde_json::json;

const DEFAULT_DURATION_SECS: u32 = 300;

/// Style-tag to audio via a Suno-style generation endpoint.
///
/// Failures are surfaced as errors, never silently replaced by a
/// placeholder artifact: a placeholder file would misrepresent success.
pub struct MusicClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MusicClient {
    /// Creates a client. An empty `api_key` marks it unconfigured; the
    /// orchestrator then skips generation and returns the resolved
    /// style tag instead of an artifact path.
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Returns true when the client has a usable credential.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Generates background audio for a style tag, returning MP3 bytes.
    pub async fn generate(&self, style: &str) -> Result<Vec<u8>, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::Config(
                "music API key is not set".to_string(),
            ));
        }

        let body = json!({
            "style": style,
            "duration_seconds": DEFAULT_DURATION_SECS,
            "instrumental": true
        });

        let response = self
            .client
            .post(format!("{}/v1/generate", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "music provider returned {}",
                status
            )));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(ProviderError::Malformed(
                "music provider returned an empty audio body".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }
}
