//! Provider credentials and endpoint settings.

use serde::Deserialize;
use std::fmt;

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_music_api_url() -> String {
    "https://api.sunoapi.org".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Which text-generation provider backs script generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextProviderKind {
    /// Anthropic messages API.
    #[default]
    Anthropic,
    /// Google Gemini generateContent API.
    Gemini,
}

/// Credentials and endpoints for every external provider.
///
/// Loaded once at startup and passed into client constructors; never
/// consulted as ambient global state. All keys default to empty, which
/// marks the corresponding provider as unconfigured.
#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    /// Which provider backs text generation.
    #[serde(default)]
    pub text_provider: TextProviderKind,

    /// Anthropic API key.
    #[serde(default)]
    pub anthropic_api_key: String,

    /// Anthropic model identifier.
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,

    /// Google Gemini API key.
    #[serde(default)]
    pub gemini_api_key: String,

    /// Gemini model identifier.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// ElevenLabs API key for speech synthesis.
    #[serde(default)]
    pub elevenlabs_api_key: String,

    /// Music-generation API key.
    #[serde(default)]
    pub music_api_key: String,

    /// Music-generation API base URL.
    #[serde(default = "default_music_api_url")]
    pub music_api_url: String,

    /// Per-request timeout for all provider calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ProviderSettings {
    // Must agree with the serde field defaults, so a missing [providers]
    // table and an empty one produce the same settings.
    fn default() -> Self {
        Self {
            text_provider: TextProviderKind::default(),
            anthropic_api_key: String::new(),
            anthropic_model: default_anthropic_model(),
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            elevenlabs_api_key: String::new(),
            music_api_key: String::new(),
            music_api_url: default_music_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ProviderSettings {
    /// Returns the names of providers whose credentials are missing.
    ///
    /// Called once at startup so absent credentials are reported before
    /// the first dependent call, not discovered mid-pipeline.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.text_provider {
            TextProviderKind::Anthropic if self.anthropic_api_key.is_empty() => {
                missing.push("anthropic")
            }
            TextProviderKind::Gemini if self.gemini_api_key.is_empty() => missing.push("gemini"),
            _ => {}
        }
        if self.elevenlabs_api_key.is_empty() {
            missing.push("elevenlabs");
        }
        if self.music_api_key.is_empty() {
            missing.push("music");
        }
        missing
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &str| if key.is_empty() { "<unset>" } else { "[REDACTED]" };
        f.debug_struct("ProviderSettings")
            .field("text_provider", &self.text_provider)
            .field("anthropic_api_key", &redact(&self.anthropic_api_key))
            .field("anthropic_model", &self.anthropic_model)
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("gemini_model", &self.gemini_model)
            .field("elevenlabs_api_key", &redact(&self.elevenlabs_api_key))
            .field("music_api_key", &redact(&self.music_api_key))
            .field("music_api_url", &self.music_api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
