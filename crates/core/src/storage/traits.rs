use async_trait::async_trait;

use crate::feedback::FeedbackRecord;

use super::Result;

/// Repository for feedback record operations.
///
/// Two operations only: records are written once and read back in bulk.
/// There is no get-by-id, update, or delete path in this system.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Writes a new record. The write is unconditional; UUID collision is
    /// treated as negligible.
    async fn put_record(&self, record: &FeedbackRecord) -> Result<()>;

    /// Returns every record in the store, in whatever order the underlying
    /// engine delivers them. Cost grows linearly with table size.
    async fn scan_all(&self) -> Result<Vec<FeedbackRecord>>;
}
