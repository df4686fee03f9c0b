//! Stream Notifier: DynamoDB insertion events to SNS.
//!
//! Runs as an AWS Lambda function behind a DynamoDB stream event source.
//!
//! Environment variables:
//! - `REGION`: region component of the destination topic ARN
//! - `TOPIC_NAME`: logical name of the destination SNS topic
//! - `RUST_LOG`: log level (trace, debug, info, warn, error)

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use stream_notifier::config::Config;
use stream_notifier::event::StreamEvent;
use stream_notifier::handler::{process_records, NotifierState};
use stream_notifier::notify::SnsPublisher;
use stream_notifier::observability::tracing::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Parse configuration from environment (and CLI arguments locally)
    let config = Config::parse_args();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    // Build the SNS client once; it is reused across all invocations
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sns = aws_sdk_sns::Client::new(&aws_config);
    let state = Arc::new(NotifierState::new(Arc::new(SnsPublisher::new(sns)), config));

    tracing::info!(
        region = %state.config.region,
        topic_name = %state.config.topic_name,
        "Stream notifier ready"
    );

    run(service_fn(move |event: LambdaEvent<StreamEvent>| {
        let state = Arc::clone(&state);
        async move {
            let (payload, context) = event.into_parts();
            let summary = process_records(&state, payload, &context.invoked_function_arn).await;
            // Best-effort contract: the invocation never fails
            Ok::<String, Error>(summary)
        }
    }))
    .await
}
