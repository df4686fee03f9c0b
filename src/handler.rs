//! The Record Notifier: filter, format, dispatch, summarize.
//!
//! Processing is best-effort by contract: a failed dispatch for one record
//! is logged and swallowed, later records are still dispatched, and the
//! invocation always reports success over the full batch size.

use std::sync::Arc;

use crate::arn;
use crate::config::Config;
use crate::event::StreamEvent;
use crate::notify::{Notification, Publisher};

/// State shared across invocations of one process.
pub struct NotifierState {
    pub publisher: Arc<dyn Publisher>,
    pub config: Config,
}

impl NotifierState {
    pub fn new(publisher: Arc<dyn Publisher>, config: Config) -> Self {
        Self { publisher, config }
    }
}

/// Process one batch of stream records.
///
/// Publishes one notification per `INSERT` record, all dispatches issued
/// concurrently. Returns only after every dispatch has settled, so the
/// platform never tears down the sandbox with calls still in flight.
///
/// The returned summary counts the FULL batch, not the insertions; this is
/// the observable contract of the notifier.
#[tracing::instrument(skip_all, fields(records = event.records.len()))]
pub async fn process_records(
    state: &NotifierState,
    event: StreamEvent,
    function_arn: &str,
) -> String {
    let account_id = arn::account_id(function_arn).unwrap_or_else(|| {
        tracing::warn!(
            function_arn,
            "Malformed invocation identity, proceeding with empty account id"
        );
        ""
    });

    // One destination per invocation, shared read-only by all dispatches.
    let topic_arn = arn::topic_arn(&state.config.region, account_id, &state.config.topic_name);

    let total = event.records.len();
    let mut dispatches = Vec::new();

    for (index, record) in event.records.iter().enumerate() {
        tracing::debug!(
            index,
            event_name = %record.event_name,
            record = %serde_json::to_string(record).unwrap_or_default(),
            "Stream record received"
        );

        if !record.is_insert() {
            continue;
        }

        let body = match record.new_image_json() {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(index, error = %e, "Unable to serialize new image");
                continue;
            }
        };

        let notification = Notification::insertion(body, topic_arn.clone());
        let publisher = Arc::clone(&state.publisher);

        dispatches.push(async move {
            match publisher.publish(&notification).await {
                Ok(receipt) => {
                    tracing::info!(
                        index,
                        message_id = ?receipt.message_id,
                        topic_arn = %notification.topic_arn,
                        "Notification published"
                    );
                }
                Err(e) => {
                    tracing::error!(index, error = %e, "Unable to send notification");
                }
            }
        });
    }

    // Every outcome is logged above; failures never fail the batch.
    futures::future::join_all(dispatches).await;

    format!("Successfully processed {total} records.")
}
