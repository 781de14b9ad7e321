use thiserror::Error;

/// Failures at the external-provider boundary.
///
/// The three variants are the recovery taxonomy the orchestrator keys
/// on: `Config` is reported to the operator and degrades the stage,
/// `Unavailable` and `Malformed` are recovered identically (fallback
/// for script generation, surfaced error for synthesis).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Missing or invalid credential; detectable before the first call.
    #[error("provider configuration error: {0}")]
    Config(String),

    /// Network failure, timeout, or non-2xx provider response.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider replied, but the payload was unparseable or empty.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Unavailable(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Unavailable(err.to_string())
        }
    }
}

/// Failures writing artifacts or their output directory.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    /// The artifact file could not be written.
    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
