//! History Repository
//!
//! The whole history lives in one JSON document, loaded in full and rewritten
//! in full on every mutation. Callers serialize access; see `HistoryService`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use relay_core::domain::history::HistoryMap;
use thiserror::Error;
use tokio::fs;

/// Repository error type
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to access history file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// JSON file holding every user's history
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full history
    ///
    /// A missing file is an empty history. An unreadable document is logged
    /// and treated as empty; the next save replaces it.
    pub async fn load(&self) -> Result<HistoryMap> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HistoryMap::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(history) => Ok(history),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable history file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(HistoryMap::new())
            }
        }
    }

    /// Rewrite the full history
    pub async fn save(&self, history: &HistoryMap) -> Result<()> {
        let json = serde_json::to_vec_pretty(history)?;

        fs::write(&self.path, json)
            .await
            .map_err(|source| HistoryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::domain::history::HistoryEntry;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));

        assert!(file.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::new(dir.path().join("history.json"));

        let mut history = HistoryMap::new();
        history
            .entry("user1".to_string())
            .or_default()
            .push(HistoryEntry::now("hi", "hello"));
        file.save(&history).await.unwrap();

        assert_eq!(file.load().await.unwrap(), history);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();

        let file = HistoryFile::new(&path);
        assert!(file.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reads_document_written_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"{
  "user1": [
    {
      "timestamp": "2025-10-01T12:00:00.000000",
      "prompt": "What is Rust?",
      "response": "A systems language."
    }
  ]
}"#,
        )
        .unwrap();

        let history = HistoryFile::new(&path).load().await.unwrap();
        assert_eq!(history["user1"].len(), 1);
        assert_eq!(history["user1"][0].prompt, "What is Rust?");
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = HistoryFile::new(dir.path().join("nope").join("history.json"));

        let err = file.save(&HistoryMap::new()).await.unwrap_err();
        assert!(matches!(err, HistoryError::Io { .. }));
    }
}
