//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ACCOUNTS_` prefix and nested values use double underscores as separators.
//!
//! The admin login secrets are deliberately *not* part of this structure. They
//! are read from `POCKETBASE_USERNAME` / `POCKETBASE_PASSWORD` only when an
//! admin login is requested.
//!
//! # Example
//!
//! ```no_run
//! use pocketbase_accounts::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! if let Some(pocketbase) = &config.pocketbase {
//!     println!("Accounts backed by {}", pocketbase.host);
//! }
//! ```

mod error;
mod logging;
mod pocketbase;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use pocketbase::PocketBaseConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// PocketBase connection; `None` leaves the accounts adapter unconfigured
    #[serde(default)]
    pub pocketbase: Option<PocketBaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ACCOUNTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ACCOUNTS__POCKETBASE__HOST=http://127.0.0.1:8090` -> `pocketbase.host`
    /// - `ACCOUNTS__LOGGING__LEVEL=debug` -> `logging.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ACCOUNTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// An absent PocketBase section is valid; it disables the adapter.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(pocketbase) = &self.pocketbase {
            pocketbase.validate()?;
        }
        Ok(())
    }

    /// Check if a PocketBase host is configured
    pub fn has_pocketbase(&self) -> bool {
        self.pocketbase.is_some()
    }
}
