//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use feedbox_core::feedback::FeedbackRecord;
use feedbox_core::storage::{FeedbackRepository, Result};

/// In-memory storage backend for testing.
///
/// A HashMap keyed by record id behind `Arc<RwLock<_>>`. Iteration order is
/// unspecified, which mirrors the unordered delivery of a table scan. Data
/// is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<Uuid, FeedbackRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryRepository {
    async fn put_record(&self, record: &FeedbackRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<FeedbackRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_then_scan() {
        let repository = InMemoryRepository::new();

        let record = FeedbackRecord::new(json!({"msg": "a"}));
        repository.put_record(&record).await.unwrap();

        let records = repository.scan_all().await.unwrap();
        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn test_scan_empty() {
        let repository = InMemoryRepository::new();
        let records = repository.scan_all().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repository = InMemoryRepository::new();
        let clone = repository.clone();

        let record = FeedbackRecord::new(json!({"msg": "shared"}));
        repository.put_record(&record).await.unwrap();

        assert_eq!(clone.scan_all().await.unwrap(), vec![record]);
    }
}
