//! SNS implementation of the publisher port.

use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;

use super::message::Notification;
use super::publisher::{PublishError, PublishReceipt, Publisher};

/// Publishes notifications through a shared SNS client.
///
/// The underlying client is cheap to clone and safe for concurrent use, so
/// a single instance serves every invocation of the process.
#[derive(Clone)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Wrap an already-configured SNS client.
    #[must_use]
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt, PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(&notification.topic_arn)
            .subject(&notification.subject)
            .message(&notification.body)
            .send()
            .await
            .map_err(|e| PublishError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(PublishReceipt {
            message_id: output.message_id,
        })
    }
}
