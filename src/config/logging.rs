//! Logging configuration

use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,pocketbase_accounts=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,pocketbase_accounts=debug");
        assert!(!config.json);
    }

    #[test]
    fn test_logging_config_deserialization() {
        let config: LoggingConfig = serde_json::from_str(r#"{ "json": true }"#).unwrap();
        assert_eq!(config.level, "info,pocketbase_accounts=debug");
        assert!(config.json);
    }
}
