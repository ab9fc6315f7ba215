use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_FILTER: &str = "info,lingobot=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            json_format: logging.json_format,
            default_filter: logging
                .filter
                .clone()
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new(Environment::Local, &LoggingSettings::default())
    }
}
