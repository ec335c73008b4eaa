//! Application state with repository-based storage.
//!
//! The shared state passed to the dispatcher. The repository handle is
//! created lazily on first storage use and cached for the lifetime of the
//! process, so index-page traffic never constructs a DynamoDB client.

use std::sync::Arc;

use tokio::sync::OnceCell;

use feedbox_core::storage::{FeedbackRepository, RepositoryError};

use crate::config::Config;
use crate::storage::{DynamoDbRepository, TracedRepository};

/// Shared application state.
///
/// Cloned per request. The repository cell is shared behind an `Arc`, so
/// concurrent first uses across tasks collapse into a single client
/// initialization; afterwards every clone sees the same handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    repository: Arc<OnceCell<Arc<dyn FeedbackRepository>>>,
}

impl AppState {
    /// Creates state with an empty repository cell; the storage client is
    /// built on first use via [`AppState::repository`].
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(OnceCell::new()),
        }
    }

    /// Guarded lazy accessor for the storage repository.
    ///
    /// The first caller builds the DynamoDB client (wrapped in the tracing
    /// decorator when `XRAY_TRACING` is active); later callers get the
    /// cached handle. Initialization failures are not cached, so a broken
    /// first attempt is retried on the next storage request.
    pub async fn repository(&self) -> Result<Arc<dyn FeedbackRepository>, RepositoryError> {
        let repository = self
            .repository
            .get_or_try_init(|| async {
                tracing::info!(
                    table = %self.config.table_name,
                    region = %self.config.aws_region,
                    traced = self.config.xray_tracing,
                    "Initializing storage client"
                );

                let inner: Arc<dyn FeedbackRepository> =
                    Arc::new(DynamoDbRepository::from_config(&self.config).await?);

                let repository: Arc<dyn FeedbackRepository> = if self.config.xray_tracing {
                    Arc::new(TracedRepository::new(inner))
                } else {
                    inner
                };

                Ok::<_, RepositoryError>(repository)
            })
            .await?;

        Ok(repository.clone())
    }
}
