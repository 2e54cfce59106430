//! PocketBase connection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// PocketBase connection configuration
///
/// Present only when accounts are backed by a PocketBase instance. When the
/// whole section is absent the accounts adapter stays unconfigured.
#[derive(Debug, Clone, Deserialize)]
pub struct PocketBaseConfig {
    /// Base URL of the PocketBase instance (e.g. `https://pb.example.com`)
    pub host: String,

    /// Auth collection holding end-user accounts
    #[serde(default = "default_users_collection")]
    pub users_collection: String,

    /// Per-request timeout in seconds, applied by the HTTP transport
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl PocketBaseConfig {
    /// Create a configuration for the given host with default settings.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            users_collection: default_users_collection(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Host without trailing slashes, ready for joining API paths.
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// Validate PocketBase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.is_empty() {
            return Err(ValidationError::MissingRequired("POCKETBASE__HOST"));
        }
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ValidationError::InvalidHost);
        }
        if self.users_collection.is_empty() {
            return Err(ValidationError::MissingRequired("POCKETBASE__USERS_COLLECTION"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
