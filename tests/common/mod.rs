//! Test utilities for notifier tests.
//!
//! Provides:
//! - A recording mock publisher with failure injection
//! - Stream event fixtures
//! - Handler state setup

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use stream_notifier::config::Config;
use stream_notifier::event::StreamEvent;
use stream_notifier::handler::NotifierState;
use stream_notifier::notify::{Notification, PublishError, PublishReceipt, Publisher};

/// Invocation identity used by most tests.
pub const FUNCTION_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:f";

/// Publisher mock that records every dispatch.
///
/// Failure injection is keyed on body content rather than call order, since
/// dispatches within a batch are issued concurrently.
#[derive(Default)]
pub struct MockPublisher {
    attempts: Mutex<Vec<Notification>>,
    published: Mutex<Vec<Notification>>,
    fail_marker: Option<String>,
}

impl MockPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mock that fails every publish whose body contains `marker`.
    pub fn failing_on(marker: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_marker: Some(marker.to_string()),
            ..Self::default()
        })
    }

    /// All dispatch attempts, including failed ones.
    pub fn attempts(&self) -> Vec<Notification> {
        self.attempts.lock().unwrap().clone()
    }

    /// Successfully published notifications.
    pub fn published(&self) -> Vec<Notification> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, notification: &Notification) -> Result<PublishReceipt, PublishError> {
        self.attempts.lock().unwrap().push(notification.clone());

        if let Some(marker) = &self.fail_marker {
            if notification.body.contains(marker) {
                return Err(PublishError::Service("injected failure".into()));
            }
        }

        let mut published = self.published.lock().unwrap();
        published.push(notification.clone());
        Ok(PublishReceipt {
            message_id: Some(format!("mock-{}", published.len())),
        })
    }
}

/// Handler state wired to the given publisher with test configuration.
pub fn test_state(publisher: Arc<MockPublisher>) -> NotifierState {
    NotifierState::new(
        publisher,
        Config {
            region: "us-east-1".into(),
            topic_name: "my-topic".into(),
            log_level: "debug".into(),
        },
    )
}

/// Build a stream record with the given event name and new image.
pub fn record(event_name: &str, new_image: Value) -> Value {
    json!({
        "eventName": event_name,
        "dynamodb": { "NewImage": new_image }
    })
}

/// Build a batch event from record values.
pub fn batch(records: Vec<Value>) -> StreamEvent {
    serde_json::from_value(json!({ "Records": records })).expect("valid stream event")
}
