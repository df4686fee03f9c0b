//! Stream Notifier: a DynamoDB-stream-to-SNS insertion notifier.
//!
//! For each `INSERT` record in a DynamoDB stream batch, publishes the
//! record's new image to a configured SNS topic. Runs as an AWS Lambda
//! function; the platform supplies batching, retries and redelivery.
//!
//! Environment variables:
//! - `REGION`: region component of the destination topic ARN
//! - `TOPIC_NAME`: logical name of the destination SNS topic
//! - `RUST_LOG`: log level (trace, debug, info, warn, error)

pub mod arn;
pub mod config;
pub mod event;
pub mod handler;
pub mod notify;
pub mod observability;
