//! Append-only feedback log for the Zenith platform.
//!
//! All writes go through [`FeedbackLog::append`], which serializes one
//! record to one newline-delimited JSON line and appends it in a single
//! `O_APPEND` write. Records are never edited or deleted; identity is
//! insertion order. Reads go through [`FeedbackLog::read_all`], which
//! skips blank lines and degrades to partial results on a malformed
//! line instead of failing the caller.
//!
//! The log is write-mostly and has no query engine; concurrent
//! appenders are safe because every append is one short atomic write
//! and nothing ever performs a read-modify-write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zenith_types::FeedbackRecord;

/// Errors from the feedback log.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The log file could not be opened or written.
    #[error("feedback log I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("feedback record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A newline-delimited JSON record store.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Creates a log handle. The file is created lazily on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends exactly one record as one line.
    ///
    /// No dedup: each call adds a line even for identical records.
    pub fn append(&self, record: &FeedbackRecord) -> Result<(), MemoryError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        // One write call per record keeps concurrent appends from
        // interleaving partial lines.
        file.write_all(line.as_bytes())
            .map_err(|source| self.io_error(source))?;

        Ok(())
    }

    /// Reads every record in insertion order.
    ///
    /// A missing file reads as empty. Blank lines are skipped. A
    /// malformed line stops the read with a warning and returns what
    /// parsed so far; the caller never sees an error for it.
    pub fn read_all(&self) -> Result<Vec<FeedbackRecord>, MemoryError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        let mut records = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<FeedbackRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        "malformed feedback line, returning {} parsed records: {}",
                        records.len(),
                        e
                    );
                    break;
                }
            }
        }

        Ok(records)
    }

    fn io_error(&self, source: std::io::Error) -> MemoryError {
        MemoryError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
