//! Client log ingestion.
//!
//! Browsers POST batches of log entries; each entry is appended as one JSON
//! line to an append-only local file.

use std::path::PathBuf;

use kinoteka_common::{AppError, AppResult};
use tokio::io::AsyncWriteExt;

/// Client log service.
#[derive(Clone)]
pub struct ClientLogService {
    path: PathBuf,
}

impl ClientLogService {
    /// Create a new client log service writing to the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a batch of client log entries.
    ///
    /// `raw` is a JSON-encoded array; each element becomes one line of the
    /// log file. Malformed JSON is a validation error and nothing is written.
    /// Returns the number of entries appended.
    pub async fn append(&self, raw: &str) -> AppResult<usize> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw)
            .map_err(|e| AppError::Validation(format!("logs is not a JSON array: {e}")))?;

        if entries.is_empty() {
            return Ok(0);
        }

        let mut buffer = String::new();
        for entry in &entries {
            // Serializing a Value back to a string cannot fail.
            buffer.push_str(&entry.to_string());
            buffer.push('\n');
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(buffer.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(count = entries.len(), path = %self.path.display(), "Client logs appended");
        Ok(entries.len())
    }
}
