//! Mock credential checker for testing.
//!
//! Implements the `CredentialChecker` port without a PocketBase instance,
//! for tests of code that consumes the port.
//!
//! # Example
//!
//! ```ignore
//! use pocketbase_accounts::adapters::auth::MockCredentialChecker;
//!
//! let checker = MockCredentialChecker::new()
//!     .with_credentials("alice", "secret123", "user-42")
//!     .with_token("tok-abc", "user-42");
//!
//! let check = checker.check_token("tok-abc").await?;
//! assert!(check.is_authenticated());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AccountsError, ConfigurationError, CredentialCheck, UserId};
use crate::ports::CredentialChecker;

/// Mock credential checker for testing.
///
/// Unknown username/password pairs and unknown tokens are `Rejected`.
#[derive(Debug, Default)]
pub struct MockCredentialChecker {
    /// Map of (username, password) pairs to their users
    credentials: RwLock<HashMap<(String, String), UserId>>,
    /// Map of valid tokens to their users
    tokens: RwLock<HashMap<String, UserId>>,
    /// Optional error to return for all checks (for error testing)
    force_error: RwLock<Option<ConfigurationError>>,
}

impl MockCredentialChecker {
    /// Creates a new empty mock checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a username/password pair for the given user.
    pub fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        self.add_credentials(username, password, user_id);
        self
    }

    /// Accepts a token for the given user.
    pub fn with_token(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.add_token(token, user_id);
        self
    }

    /// Forces all checks to return the specified error.
    pub fn with_error(self, error: ConfigurationError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a username/password pair at runtime.
    pub fn add_credentials(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        user_id: impl Into<String>,
    ) {
        self.credentials
            .write()
            .unwrap()
            .insert((username.into(), password.into()), test_user_id(user_id));
    }

    /// Registers a valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user_id: impl Into<String>) {
        self.tokens
            .write()
            .unwrap()
            .insert(token.into(), test_user_id(user_id));
    }

    /// Removes a token, making it invalid.
    pub fn revoke_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }

    fn forced_error(&self) -> Result<(), AccountsError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

fn test_user_id(user_id: impl Into<String>) -> UserId {
    UserId::new(user_id).unwrap()
}

fn into_check(user: Option<UserId>) -> CredentialCheck {
    user.map_or(CredentialCheck::Rejected, CredentialCheck::Authenticated)
}

#[async_trait]
impl CredentialChecker for MockCredentialChecker {
    async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialCheck, AccountsError> {
        self.forced_error()?;

        let user = self
            .credentials
            .read()
            .unwrap()
            .get(&(username.to_string(), password.to_string()))
            .cloned();
        Ok(into_check(user))
    }

    async fn check_token(&self, token: &str) -> Result<CredentialCheck, AccountsError> {
        self.forced_error()?;

        let user = self.tokens.read().unwrap().get(token).cloned();
        Ok(into_check(user))
    }
}
