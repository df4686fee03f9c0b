//! Observability setup for the notifier.

pub mod tracing;
