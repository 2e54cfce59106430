//! PocketBase client handle.
//!
//! A [`PocketBaseClient`] is bound to one PocketBase host and owns an
//! [`AuthStore`]. Successful auth calls populate the store; the token in the
//! store is sent on later calls that need it (`auth-refresh`).
//!
//! Handles are cheap to create: the underlying `reqwest::Client` is a shared
//! connection pool with no session state, so every handle built with
//! [`PocketBaseClient::with_http_client`] has its own isolated auth state.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    AdminAuthResponse, ApiErrorResponse, AuthModel, PasswordAuthRequest, RecordAuthResponse,
};

/// Errors returned by PocketBase API calls.
#[derive(Debug, Error)]
pub enum PocketBaseError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("PocketBase request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// PocketBase answered with a non-success status.
    #[error("PocketBase returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// The response body did not match the expected shape.
    #[error("Unexpected PocketBase response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PocketBaseError {
    /// HTTP status of an API error, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PocketBaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Authentication state held by a single client handle.
#[derive(Clone, Default)]
pub struct AuthStore {
    token: Option<SecretString>,
    model: Option<AuthModel>,
}

impl AuthStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a token without an associated model.
    ///
    /// Used to probe a caller-supplied token with `auth-refresh`.
    pub fn save(&mut self, token: impl Into<String>) {
        self.token = Some(SecretString::new(token.into()));
        self.model = None;
    }

    /// Drops the token and model.
    pub fn clear(&mut self) {
        self.token = None;
        self.model = None;
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// The authenticated account, if an auth call succeeded.
    pub fn model(&self) -> Option<&AuthModel> {
        self.model.as_ref()
    }

    /// True once an auth call on this handle has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.model.is_some()
    }

    fn authenticated(&mut self, token: String, model: AuthModel) {
        self.token = Some(SecretString::new(token));
        self.model = Some(model);
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("has_token", &self.token.is_some())
            .field("model", &self.model)
            .finish()
    }
}

/// A PocketBase client handle bound to one host.
pub struct PocketBaseClient {
    http: reqwest::Client,
    base_url: String,
    auth_store: AuthStore,
}

impl PocketBaseClient {
    /// Creates a handle with its own HTTP transport.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PocketBaseError> {
        let http = build_http_client(timeout)?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Creates a handle that shares an existing HTTP transport.
    ///
    /// The new handle starts with an empty auth store.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_store: AuthStore::new(),
        }
    }

    /// Base URL of the bound PocketBase host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current authentication state.
    pub fn auth_store(&self) -> &AuthStore {
        &self.auth_store
    }

    /// Mutable authentication state, e.g. to inject a token.
    pub fn auth_store_mut(&mut self) -> &mut AuthStore {
        &mut self.auth_store
    }

    /// Authenticate as a PocketBase admin.
    ///
    /// `POST /api/admins/auth-with-password`
    pub async fn admin_auth_with_password(
        &mut self,
        identity: &str,
        password: &SecretString,
    ) -> Result<AuthModel, PocketBaseError> {
        let url = format!("{}/api/admins/auth-with-password", self.base_url);
        let request = self.http.post(&url).json(&PasswordAuthRequest {
            identity,
            password: password.expose_secret(),
        });

        let response: AdminAuthResponse = send(request).await?;
        self.auth_store
            .authenticated(response.token, response.admin.clone());
        Ok(response.admin)
    }

    /// Authenticate a record of an auth collection.
    ///
    /// `POST /api/collections/{collection}/auth-with-password`
    pub async fn auth_with_password(
        &mut self,
        collection: &str,
        identity: &str,
        password: &str,
    ) -> Result<AuthModel, PocketBaseError> {
        let url = format!(
            "{}/api/collections/{}/auth-with-password",
            self.base_url, collection
        );
        let request = self
            .http
            .post(&url)
            .json(&PasswordAuthRequest { identity, password });

        let response: RecordAuthResponse = send(request).await?;
        self.auth_store
            .authenticated(response.token, response.record.clone());
        Ok(response.record)
    }

    /// Refresh the stored token for a record of an auth collection.
    ///
    /// `POST /api/collections/{collection}/auth-refresh`. PocketBase rejects
    /// missing, invalid and expired tokens, so a successful refresh proves
    /// the stored token was valid.
    pub async fn auth_refresh(&mut self, collection: &str) -> Result<AuthModel, PocketBaseError> {
        let url = format!(
            "{}/api/collections/{}/auth-refresh",
            self.base_url, collection
        );
        let mut request = self.http.post(&url);
        if let Some(token) = self.auth_store.token() {
            request = request.header(AUTHORIZATION, token.expose_secret().as_str());
        }

        let response: RecordAuthResponse = send(request).await?;
        self.auth_store
            .authenticated(response.token, response.record.clone());
        Ok(response.record)
    }
}

impl std::fmt::Debug for PocketBaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PocketBaseClient")
            .field("base_url", &self.base_url)
            .field("auth_store", &self.auth_store)
            .finish_non_exhaustive()
    }
}

/// Builds the HTTP transport shared by client handles.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, PocketBaseError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, PocketBaseError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ApiErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
        return Err(PocketBaseError::Api { status, message });
    }

    Ok(serde_json::from_slice(&body)?)
}
