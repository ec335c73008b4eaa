use std::env;

use thiserror::Error;

/// Default location of the index document, resolved relative to the working
/// directory of the deployed artifact.
const DEFAULT_INDEX_PATH: &str = "index.html";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding feedback records (required)
    pub table_name: String,
    /// AWS region the table lives in (required)
    pub aws_region: String,
    /// Whether storage calls are wrapped with tracing instrumentation
    pub xray_tracing: bool,
    /// Path to the static index document served for non-feedback GETs
    pub index_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table identifier (required)
    /// - `AWS_REGION` - AWS region for the table (required)
    /// - `XRAY_TRACING` - `"Active"` (case-insensitive) enables request
    ///   tracing on storage calls; any other value or absence disables it
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: env::var("TABLE_NAME").map_err(|_| ConfigError::MissingVar("TABLE_NAME"))?,
            aws_region: env::var("AWS_REGION").map_err(|_| ConfigError::MissingVar("AWS_REGION"))?,
            xray_tracing: env::var("XRAY_TRACING")
                .map(|v| v.eq_ignore_ascii_case("active"))
                .unwrap_or(false),
            index_path: DEFAULT_INDEX_PATH.to_string(),
        })
    }
}
