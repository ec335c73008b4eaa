//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `feedbox_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use feedbox_core::feedback::FeedbackRecord;
use feedbox_core::storage::{FeedbackRepository, Result};

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// One logical table keyed by `id` (string), with `ts` (number) and `data`
/// (a native document value mirroring the submitted JSON).
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;
        let client = Client::new(&sdk_config);

        Ok(Self::new(client, config.table_name.clone()))
    }
}

#[async_trait]
impl FeedbackRepository for DynamoDbRepository {
    async fn put_record(&self, record: &FeedbackRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, record.id.to_string()))?;

        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<FeedbackRecord>> {
        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        // The engine pages Scan results, so keep following
        // last_evaluated_key until the table is exhausted. Cost and latency
        // grow linearly with table size on every call.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            let items = result.items.unwrap_or_default();
            for item in &items {
                records.push(item_to_record(item)?);
            }

            exclusive_start_key = result.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }
}
