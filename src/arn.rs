//! Destination topic ARN construction.
//!
//! The account identifier is taken from the invocation identity ARN
//! (`arn:<partition>:<service>:<region>:<accountId>:<resource>`), which the
//! platform guarantees to be colon-delimited with the account at index 4.

/// Extract the account identifier from an invocation identity ARN.
///
/// Returns `None` when the ARN has fewer than five colon-delimited fields.
#[must_use]
pub fn account_id(function_arn: &str) -> Option<&str> {
    function_arn.split(':').nth(4)
}

/// Build the destination SNS topic ARN.
///
/// Segments are interpolated as given: an unset region or topic name yields
/// an ARN with empty segments rather than an error, matching the
/// best-effort posture of the notifier.
#[must_use]
pub fn topic_arn(region: &str, account_id: &str, topic_name: &str) -> String {
    format!("arn:aws:sns:{region}:{account_id}:{topic_name}")
}
