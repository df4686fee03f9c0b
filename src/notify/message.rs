//! Notification value object.

/// Subject line attached to every insertion notification.
pub const INSERTION_SUBJECT: &str = "A new insertion in database table";

/// One outbound notification.
///
/// Constructed per qualifying record, dispatched, and discarded; it has no
/// identity beyond the publish call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Subject line shown to topic subscribers.
    pub subject: String,
    /// Serialized form of the record's new image.
    pub body: String,
    /// Destination topic ARN.
    pub topic_arn: String,
}

impl Notification {
    /// Build an insertion notification with the fixed subject.
    #[must_use]
    pub fn insertion(body: String, topic_arn: String) -> Self {
        Self {
            subject: INSERTION_SUBJECT.to_string(),
            body,
            topic_arn,
        }
    }
}
