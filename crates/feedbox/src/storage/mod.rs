//! Storage backend implementations.
//!
//! Concrete implementations of the `FeedbackRepository` trait from
//! `feedbox_core::storage`: DynamoDB for deployment, an in-memory map for
//! tests, and a tracing decorator applied when `XRAY_TRACING` is active.

pub mod dynamodb;
#[cfg(test)]
pub mod memory;
mod traced;

pub use dynamodb::DynamoDbRepository;
pub use traced::TracedRepository;
