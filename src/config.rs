//! Configuration parsing for the notifier.
//!
//! Supports:
//! - Environment variables (the only source on Lambda)
//! - CLI argument overrides for local runs
//! - Defaults that mirror the degraded-ARN behavior when unset

use clap::Parser;

/// Stream Notifier: publishes DynamoDB insertion records to an SNS topic.
#[derive(Parser, Debug, Clone)]
#[command(name = "stream-notifier")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Region component of the destination topic ARN
    #[arg(long, env = "REGION", default_value = "")]
    pub region: String,

    /// Logical name of the destination SNS topic
    #[arg(long, env = "TOPIC_NAME", default_value = "")]
    pub topic_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: String::new(),
            topic_name: String::new(),
            log_level: "info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.region, "");
        assert_eq!(config.topic_name, "");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_from_flags() {
        let config = Config::parse_from([
            "stream-notifier",
            "--region",
            "us-east-1",
            "--topic-name",
            "my-topic",
        ]);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.topic_name, "my-topic");
    }
}
