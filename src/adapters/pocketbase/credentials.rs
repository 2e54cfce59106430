//! Admin account credentials.

use secrecy::SecretString;

use crate::domain::foundation::ConfigurationError;

/// Environment variable holding the admin identity (email).
pub const USERNAME_ENV: &str = "POCKETBASE_USERNAME";

/// Environment variable holding the admin password.
pub const PASSWORD_ENV: &str = "POCKETBASE_PASSWORD";

/// Credentials for the PocketBase admin account.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    /// Create credentials from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Read credentials from `POCKETBASE_USERNAME` and `POCKETBASE_PASSWORD`.
    ///
    /// An empty value counts as missing.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let username = non_empty_var(USERNAME_ENV)?;
        let password = non_empty_var(PASSWORD_ENV)?;
        Ok(Self::new(username, password))
    }

    /// The admin identity.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The admin password.
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn non_empty_var(name: &str) -> Result<String, ConfigurationError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigurationError::CredentialsNotSpecified),
    }
}
