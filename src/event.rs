//! Inbound DynamoDB stream event types.
//!
//! The stream payload mixes casings: the batch field and image keys are
//! PascalCase, the per-record fields are camelCase. The new image is kept
//! as an opaque JSON value so the published body is the serialized form of
//! exactly what arrived, whatever shape the table uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name carried by insertion records.
pub const EVENT_INSERT: &str = "INSERT";

/// One invocation's batch of stream records.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StreamEvent {
    #[serde(default)]
    pub records: Vec<StreamRecord>,
}

/// A single change-stream entry.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    /// INSERT, MODIFY or REMOVE.
    #[serde(default)]
    pub event_name: String,

    #[serde(default)]
    pub dynamodb: Option<StreamData>,
}

/// The change payload of a record.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StreamData {
    /// Post-mutation item state; present on INSERT and MODIFY.
    #[serde(default)]
    pub new_image: Option<Value>,
}

impl StreamRecord {
    /// Whether this record represents an insertion.
    #[must_use]
    pub fn is_insert(&self) -> bool {
        self.event_name == EVENT_INSERT
    }

    /// Serialize the new image to JSON text.
    ///
    /// A record without an image serializes as `null` so that every
    /// insertion still yields exactly one notification body.
    pub fn new_image_json(&self) -> Result<String, serde_json::Error> {
        let image = self.dynamodb.as_ref().and_then(|d| d.new_image.as_ref());
        serde_json::to_string(&image)
    }
}
