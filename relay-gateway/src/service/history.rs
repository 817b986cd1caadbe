//! History Service
//!
//! Append-only per-user prompt history on top of the JSON file repository.
//! Every operation holds one async mutex across its load/rewrite cycle, so
//! concurrent requests cannot lose each other's appends.

use relay_core::domain::history::HistoryEntry;
use tokio::sync::Mutex;

use crate::repository::history_repository::{HistoryFile, Result};

pub struct HistoryService {
    file: HistoryFile,
    lock: Mutex<()>,
}

impl HistoryService {
    pub fn new(file: HistoryFile) -> Self {
        Self {
            file,
            lock: Mutex::new(()),
        }
    }

    /// Append a prompt/response pair stamped with the current time
    pub async fn append(&self, username: &str, prompt: &str, response: &str) -> Result<HistoryEntry> {
        let _guard = self.lock.lock().await;

        let mut history = self.file.load().await?;
        let entry = HistoryEntry::now(prompt, response);
        history
            .entry(username.to_string())
            .or_default()
            .push(entry.clone());
        self.file.save(&history).await?;

        tracing::debug!("Recorded history entry for {}", username);

        Ok(entry)
    }

    /// All entries for `username` in insertion order; empty for unknown users
    pub async fn list(&self, username: &str) -> Result<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().await;

        let mut history = self.file.load().await?;
        Ok(history.remove(username).unwrap_or_default())
    }

    /// Empty `username`'s history, returning how many entries were removed
    pub async fn clear(&self, username: &str) -> Result<usize> {
        let _guard = self.lock.lock().await;

        let mut history = self.file.load().await?;
        let cleared = match history.get_mut(username) {
            Some(entries) if !entries.is_empty() => std::mem::take(entries).len(),
            _ => return Ok(0),
        };
        self.file.save(&history).await?;

        tracing::info!("Cleared {} history entries for {}", cleared, username);

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn service(dir: &tempfile::TempDir) -> HistoryService {
        HistoryService::new(HistoryFile::new(dir.path().join("history.json")))
    }

    #[tokio::test]
    async fn test_append_then_list_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);

        for i in 0..5 {
            history
                .append("user1", &format!("prompt {}", i), &format!("response {}", i))
                .await
                .unwrap();
        }

        let entries = history.list("user1").await.unwrap();
        assert_eq!(entries.len(), 5);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.prompt, format!("prompt {}", i));
            assert_eq!(entry.response, format!("response {}", i));
        }
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_unknown_user_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);

        assert!(history.list("ghost").await.unwrap().is_empty());

        history.append("user1", "p", "r").await.unwrap();
        assert!(history.list("ghost").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_only_affects_one_user() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);

        history.append("user1", "a", "1").await.unwrap();
        history.append("user1", "b", "2").await.unwrap();
        history.append("user2", "c", "3").await.unwrap();

        assert_eq!(history.clear("user1").await.unwrap(), 2);

        assert!(history.list("user1").await.unwrap().is_empty());
        let other = history.list("user2").await.unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].prompt, "c");
    }

    #[tokio::test]
    async fn test_clear_unknown_user_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);

        assert_eq!(history.clear("ghost").await.unwrap(), 0);
        assert!(!dir.path().join("history.json").exists());
    }

    #[tokio::test]
    async fn test_history_survives_new_service_instance() {
        let dir = tempfile::tempdir().unwrap();
        service(&dir).append("user1", "p", "r").await.unwrap();

        let entries = service(&dir).list("user1").await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let history = Arc::new(service(&dir));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let history = Arc::clone(&history);
                let user = if i % 2 == 0 { "user1" } else { "user2" };
                tokio::spawn(async move {
                    history
                        .append(user, &format!("p{}", i), "r")
                        .await
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(history.list("user1").await.unwrap().len(), 10);
        assert_eq!(history.list("user2").await.unwrap().len(), 10);
    }
}
