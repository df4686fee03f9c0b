//! Notification types and publisher seam.

pub mod message;
pub mod publisher;
pub mod sns;

pub use message::{Notification, INSERTION_SUBJECT};
pub use publisher::{PublishError, PublishReceipt, Publisher};
pub use sns::SnsPublisher;
