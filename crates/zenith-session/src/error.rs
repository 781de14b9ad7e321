use thiserror::Error;
use zenith_providers::{ProviderError, StorageError};

/// Failures the orchestrator surfaces to the HTTP layer.
///
/// Script-generation failures never appear here; they are absorbed by
/// the fallback path inside [`crate::generate_script`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// A configured speech-synthesis call failed.
    #[error("speech synthesis failed: {0}")]
    Speech(#[source] ProviderError),

    /// A configured music-generation call failed.
    #[error("music generation failed: {0}")]
    Music(#[source] ProviderError),

    /// An artifact could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Returns true when the underlying cause is a missing credential
    /// rather than a provider outage.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SessionError::Speech(ProviderError::Config(_))
                | SessionError::Music(ProviderError::Config(_))
        )
    }
}
