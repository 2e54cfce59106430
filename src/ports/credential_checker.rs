//! Credential checking port.
//!
//! This port defines the contract request handlers use to turn a login form
//! or a session token into a user identity. The PocketBase adapter is the
//! production implementation; `MockCredentialChecker` covers tests.
//!
//! # Example
//!
//! ```ignore
//! async fn login(
//!     checker: Arc<dyn CredentialChecker>,
//!     form: LoginForm,
//! ) -> Result<Option<UserId>, AccountsError> {
//!     let check = checker.check_credentials(&form.username, &form.password).await?;
//!     Ok(check.into_user_id())
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AccountsError, CredentialCheck};

/// Verifies passwords and session tokens against an accounts backend.
///
/// # Contract
///
/// Implementations must:
/// - Return `CredentialCheck::Authenticated` with the user's ID on success
/// - Return `CredentialCheck::Rejected` for every backend-side failure,
///   including an unreachable backend
/// - Return `AccountsError::Configuration` only when no backend is
///   configured, without sending any request
/// - Keep each call's session state isolated from every other call
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    /// Check a username (or email) and password pair.
    ///
    /// Inputs are passed through unvalidated; the backend decides whether
    /// an empty username or password is acceptable.
    async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialCheck, AccountsError>;

    /// Check that a previously issued session token is still valid.
    async fn check_token(&self, token: &str) -> Result<CredentialCheck, AccountsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConfigurationError, UserId};
    use std::collections::HashMap;

    /// Simple in-memory implementation for exercising the trait.
    struct TestCredentialChecker {
        passwords: HashMap<(String, String), UserId>,
        tokens: HashMap<String, UserId>,
        configured: bool,
    }

    impl TestCredentialChecker {
        fn new() -> Self {
            let user = UserId::new("user-42").unwrap();
            Self {
                passwords: HashMap::from([(
                    ("alice".to_string(), "secret123".to_string()),
                    user.clone(),
                )]),
                tokens: HashMap::from([("tok-abc".to_string(), user)]),
                configured: true,
            }
        }
    }

    #[async_trait]
    impl CredentialChecker for TestCredentialChecker {
        async fn check_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> Result<CredentialCheck, AccountsError> {
            if !self.configured {
                return Err(ConfigurationError::NotConfigured.into());
            }
            Ok(self
                .passwords
                .get(&(username.to_string(), password.to_string()))
                .cloned()
                .map_or(CredentialCheck::Rejected, CredentialCheck::Authenticated))
        }

        async fn check_token(&self, token: &str) -> Result<CredentialCheck, AccountsError> {
            if !self.configured {
                return Err(ConfigurationError::NotConfigured.into());
            }
            Ok(self
                .tokens
                .get(token)
                .cloned()
                .map_or(CredentialCheck::Rejected, CredentialCheck::Authenticated))
        }
    }

    #[tokio::test]
    async fn checker_returns_user_for_valid_password() {
        let checker = TestCredentialChecker::new();

        let result = checker.check_credentials("alice", "secret123").await.unwrap();

        assert_eq!(result.user_id().map(UserId::as_str), Some("user-42"));
    }

    #[tokio::test]
    async fn checker_rejects_wrong_password_without_error() {
        let checker = TestCredentialChecker::new();

        let result = checker.check_credentials("alice", "wrong").await.unwrap();

        assert_eq!(result, CredentialCheck::Rejected);
    }

    #[tokio::test]
    async fn checker_reports_missing_configuration_as_error() {
        let mut checker = TestCredentialChecker::new();
        checker.configured = false;

        let result = checker.check_token("tok-abc").await;

        assert!(matches!(
            result,
            Err(AccountsError::Configuration(ConfigurationError::NotConfigured))
        ));
    }

    #[test]
    fn credential_checker_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CredentialChecker) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CredentialChecker>>();
    }
}
