//! PocketBase-backed accounts adapter.
//!
//! [`PocketBaseAccounts`] implements the `CredentialChecker` port and owns
//! the shared admin session. It is built once at startup in one of two
//! states and passed to whoever needs it:
//!
//! - [`PocketBaseAccounts::unconfigured`] - no host; every operation fails
//!   with `ConfigurationError::NotConfigured` without touching the network
//! - [`PocketBaseAccounts::configured`] - bound to one PocketBase host
//!
//! # Session isolation
//!
//! Credential and token checks each build a fresh [`PocketBaseClient`] with
//! an empty auth store, so concurrent checks never see each other's tokens
//! and never touch the admin session. Only [`PocketBaseAccounts::login`]
//! uses the shared admin handle.
//!
//! # Rejections
//!
//! Every failure of a check call (unknown user, wrong password, expired
//! token, unreachable host, malformed response) is reported as
//! `CredentialCheck::Rejected`. Callers cannot tell these apart, which keeps
//! login responses from revealing which part of a credential was wrong.
//!
//! # Example
//!
//! ```ignore
//! let accounts = PocketBaseAccounts::configured(PocketBaseConfig::new("http://127.0.0.1:8090"))?;
//! accounts.login().await?;
//!
//! match accounts.check_credentials("alice", "secret123").await? {
//!     CredentialCheck::Authenticated(user_id) => println!("welcome {}", user_id),
//!     CredentialCheck::Rejected => println!("invalid login"),
//! }
//! ```

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::client::{build_http_client, AuthStore, PocketBaseClient, PocketBaseError};
use super::credentials::AdminCredentials;
use super::types::AuthModel;
use crate::config::PocketBaseConfig;
use crate::domain::foundation::{AccountsError, ConfigurationError, CredentialCheck, UserId};
use crate::ports::CredentialChecker;

/// Accounts adapter backed by PocketBase.
pub struct PocketBaseAccounts {
    backend: Option<Backend>,
}

/// Everything that only exists once a host is configured.
struct Backend {
    config: PocketBaseConfig,
    http: reqwest::Client,
    admin: Mutex<PocketBaseClient>,
}

impl PocketBaseAccounts {
    /// An adapter with no PocketBase host.
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// An adapter bound to the configured PocketBase host.
    ///
    /// No request is sent; the admin session starts unauthenticated.
    pub fn configured(config: PocketBaseConfig) -> Result<Self, AccountsError> {
        let http = build_http_client(config.request_timeout())
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;
        let admin = PocketBaseClient::with_http_client(http.clone(), config.base_url());

        Ok(Self {
            backend: Some(Backend {
                config,
                http,
                admin: Mutex::new(admin),
            }),
        })
    }

    /// Configured if `config` is present, unconfigured otherwise.
    pub fn from_config(config: Option<PocketBaseConfig>) -> Result<Self, AccountsError> {
        match config {
            Some(config) => Self::configured(config),
            None => Ok(Self::unconfigured()),
        }
    }

    /// True when a PocketBase host is configured.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// The configured PocketBase host, without trailing slash.
    pub fn host(&self) -> Option<&str> {
        self.backend.as_ref().map(|b| b.config.base_url())
    }

    /// Log the shared admin handle in with `POCKETBASE_USERNAME` and
    /// `POCKETBASE_PASSWORD`.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError::CredentialsNotSpecified` if either variable is
    ///   missing or empty (no request is sent)
    /// - `ConfigurationError::NotConfigured` if no host is configured
    /// - `AccountsError::RemoteAuth` if PocketBase rejects the login or
    ///   cannot be reached; a warning is logged first
    pub async fn login(&self) -> Result<(), AccountsError> {
        let credentials = AdminCredentials::from_env()?;
        self.login_as(&credentials).await
    }

    /// Log the shared admin handle in with explicit credentials.
    pub async fn login_as(&self, credentials: &AdminCredentials) -> Result<(), AccountsError> {
        let backend = self.backend()?;
        let mut admin = backend.admin.lock().await;

        match admin
            .admin_auth_with_password(credentials.username(), credentials.password())
            .await
        {
            Ok(model) => {
                tracing::info!(
                    host = %backend.config.base_url(),
                    admin_id = %model.id,
                    "Logged in to PocketBase as admin"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    host = %backend.config.base_url(),
                    error = %e,
                    "Failed to login to PocketBase! Check host and credentials."
                );
                Err(AccountsError::remote_auth(e))
            }
        }
    }

    /// Snapshot of the admin session, once `login` has succeeded.
    pub async fn admin_session(&self) -> Option<AuthStore> {
        let backend = self.backend.as_ref()?;
        let admin = backend.admin.lock().await;
        admin
            .auth_store()
            .is_authenticated()
            .then(|| admin.auth_store().clone())
    }

    /// True once the shared admin handle holds a session.
    pub async fn is_admin_authenticated(&self) -> bool {
        self.admin_session().await.is_some()
    }

    fn backend(&self) -> Result<&Backend, ConfigurationError> {
        self.backend.as_ref().ok_or(ConfigurationError::NotConfigured)
    }

    /// A fresh handle with an empty auth store, for one check call.
    fn call_scoped_client(&self) -> Result<(PocketBaseClient, &str), ConfigurationError> {
        let backend = self.backend()?;
        let client = PocketBaseClient::with_http_client(backend.http.clone(), backend.config.base_url());
        Ok((client, backend.config.users_collection.as_str()))
    }
}

#[async_trait]
impl CredentialChecker for PocketBaseAccounts {
    async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CredentialCheck, AccountsError> {
        let (mut client, collection) = self.call_scoped_client()?;
        let result = client.auth_with_password(collection, username, password).await;
        Ok(into_check(result, "credentials"))
    }

    async fn check_token(&self, token: &str) -> Result<CredentialCheck, AccountsError> {
        let (mut client, collection) = self.call_scoped_client()?;
        client.auth_store_mut().save(token);
        let result = client.auth_refresh(collection).await;
        Ok(into_check(result, "token"))
    }
}

/// Collapses the outcome of a check call into a `CredentialCheck`.
fn into_check(result: Result<AuthModel, PocketBaseError>, kind: &'static str) -> CredentialCheck {
    let model = match result {
        Ok(model) => model,
        Err(e) => {
            tracing::debug!(kind, status = ?e.status(), "PocketBase rejected check");
            return CredentialCheck::Rejected;
        }
    };

    match UserId::new(model.id) {
        Ok(user_id) => CredentialCheck::Authenticated(user_id),
        Err(_) => {
            tracing::debug!(kind, "PocketBase returned a record without an id");
            CredentialCheck::Rejected
        }
    }
}

impl std::fmt::Debug for PocketBaseAccounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PocketBaseAccounts")
            .field("host", &self.host())
            .finish_non_exhaustive()
    }
}
