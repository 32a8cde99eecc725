use crate::presentation::config::{Environment, LoggingSettings};

const DEFAULT_FILTER: &str = "info,vocalscript=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let filter = if settings.level.trim().is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            settings.level.clone()
        };

        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
