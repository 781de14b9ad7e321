//! External-provider boundary for the Zenith platform.
//!
//! Everything in this crate talks to the outside world: text-generation
//! providers behind the [`TextGenerator`] capability trait, the
//! ElevenLabs speech synthesizer, the music-generation service, and the
//! artifact store that persists returned audio bytes under unique
//! filenames.
//!
//! The pipeline in `zenith-session` never constructs a provider itself;
//! clients are built once at startup from [`ProviderSettings`] and
//! injected, so swapping providers never touches pipeline logic.

pub mod anthropic;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod gemini;
pub mod music;
pub mod speech;
pub mod text;

pub use anthropic::AnthropicClient;
pub use artifacts::{ArtifactKind, ArtifactStore};
pub use config::{ProviderSettings, TextProviderKind};
pub use error::{ProviderError, StorageError};
pub use gemini::GeminiClient;
pub use music::MusicClient;
pub use speech::SpeechClient;
pub use text::{build_text_generator, TextGenerator};

/// Builds the shared HTTP client used by every provider.
///
/// Provider calls are user-facing and interactive, so every request is
/// bounded by the configured timeout rather than left open-ended.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(concat!("zenith/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}
