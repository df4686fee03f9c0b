//! Publisher port for the external notification service.
//!
//! The handler only depends on this trait; the SNS client implements it in
//! production and tests substitute a recording mock.

use async_trait::async_trait;
use thiserror::Error;

use super::message::Notification;

/// Error type for dispatch failures.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("notification service error: {0}")]
    Service(String),
}

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    /// The service-assigned message ID, when the service returns one.
    pub message_id: Option<String>,
}

/// Port for publishing notifications to a pub/sub topic.
///
/// Implementations must be `Send + Sync`: one client is created at process
/// startup and shared across all in-flight dispatches.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a single notification to its destination topic.
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt, PublishError>;
}
