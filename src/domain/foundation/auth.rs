//! Authentication types for the domain layer.
//!
//! These types describe the outcome of checking a credential against the
//! accounts backend. They have **no provider dependencies**: the PocketBase
//! adapter populates them, and so can any other `CredentialChecker`.
//!
//! # Outcomes vs errors
//!
//! A rejected password or token is an ordinary outcome and is returned as
//! [`CredentialCheck::Rejected`]. Errors are reserved for conditions the
//! caller has to fix before any check can succeed (missing configuration)
//! or for administrative login failures that should stop the process.

use std::error::Error as StdError;

use thiserror::Error;

use super::UserId;

/// Result of checking a password or session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    /// The backend accepted the credential and identified this user.
    Authenticated(UserId),

    /// The backend did not accept the credential.
    ///
    /// Unknown users, wrong passwords, expired tokens and an unreachable
    /// backend all end up here.
    Rejected,
}

impl CredentialCheck {
    /// Returns true if the credential was accepted.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CredentialCheck::Authenticated(_))
    }

    /// Returns the authenticated user's ID, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            CredentialCheck::Authenticated(id) => Some(id),
            CredentialCheck::Rejected => None,
        }
    }

    /// Consumes the outcome, returning the authenticated user's ID, if any.
    pub fn into_user_id(self) -> Option<UserId> {
        match self {
            CredentialCheck::Authenticated(id) => Some(id),
            CredentialCheck::Rejected => None,
        }
    }
}

/// Precondition failures raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No PocketBase host was configured at startup.
    #[error("PocketBase not configured")]
    NotConfigured,

    /// The admin username or password environment variable is missing.
    #[error("PocketBase username or password not specified")]
    CredentialsNotSpecified,

    /// The HTTP transport could not be built from the configuration.
    #[error("Failed to create PocketBase HTTP client: {0}")]
    HttpClient(String),
}

/// Errors returned by the accounts adapter.
#[derive(Debug, Error)]
pub enum AccountsError {
    /// The adapter cannot run the operation in its current configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The admin login request failed.
    ///
    /// The underlying transport or API error is kept as the source.
    #[error("Failed to authenticate with PocketBase: {source}")]
    RemoteAuth {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl AccountsError {
    /// Wraps a remote failure from the admin login path.
    pub fn remote_auth(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::RemoteAuth {
            source: Box::new(source),
        }
    }

    /// Returns true if this is a configuration precondition failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AccountsError::Configuration(_))
    }

    /// Returns true if the remote service rejected or failed the admin login.
    pub fn is_remote_auth(&self) -> bool {
        matches!(self, AccountsError::RemoteAuth { .. })
    }
}
