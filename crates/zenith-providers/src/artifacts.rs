//! Audio artifact persistence.
//!
//! Synthesized audio bytes are written under a configured output
//! directory with filenames of the form
//! `{kind}_{YYYYMMDD_HHMMSS}_{random8}.mp3`. The timestamp plus a short
//! random token keeps concurrent requests from colliding without any
//! cross-request coordination.

use crate::error::StorageError;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// What kind of artifact a file holds; becomes the filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Synthesized speech.
    Voice,
    /// Generated background music.
    Music,
}

impl ArtifactKind {
    /// The filename prefix for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Music => "music",
        }
    }
}

/// Writes audio artifacts to the configured output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    output_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at `output_dir`. The directory itself is
    /// created lazily on the first write.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Persists `bytes` under a unique filename and returns its path.
    pub async fn write(&self, kind: ArtifactKind, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.output_dir.display().to_string(),
                source,
            })?;

        let path = self.output_dir.join(unique_filename(kind));
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.display().to_string(),
                source,
            })?;

        Ok(path)
    }
}

/// Builds `{kind}_{timestamp}_{random8}.mp3`.
fn unique_filename(kind: ArtifactKind) -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}.mp3", kind.as_str(), timestamp, &token[..8])
}
