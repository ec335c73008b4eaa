//! Tracing decorator for repository calls.
//!
//! Applied when `XRAY_TRACING` is `Active`: each outbound storage call runs
//! inside its own span so it shows up in the request trace. A pure
//! cross-cutting concern - data semantics of the inner repository are
//! untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use feedbox_core::feedback::FeedbackRecord;
use feedbox_core::storage::{FeedbackRepository, Result};

/// Wraps another repository and instruments every call with a tracing span.
pub struct TracedRepository {
    inner: Arc<dyn FeedbackRepository>,
}

impl TracedRepository {
    /// Creates a decorator around the given repository.
    pub fn new(inner: Arc<dyn FeedbackRepository>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FeedbackRepository for TracedRepository {
    async fn put_record(&self, record: &FeedbackRecord) -> Result<()> {
        let span = tracing::info_span!("storage.put_record", record_id = %record.id);
        self.inner.put_record(record).instrument(span).await
    }

    async fn scan_all(&self) -> Result<Vec<FeedbackRecord>> {
        let span = tracing::info_span!("storage.scan_all");
        self.inner.scan_all().instrument(span).await
    }
}
