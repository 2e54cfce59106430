//! PocketBase REST wire types.
//!
//! Only the fields the accounts adapter reads are modelled; everything else
//! in the JSON payloads is ignored.

use serde::{Deserialize, Serialize};

/// Body of the `auth-with-password` endpoints (admins and auth collections).
#[derive(Debug, Serialize)]
pub(crate) struct PasswordAuthRequest<'a> {
    pub identity: &'a str,
    pub password: &'a str,
}

/// Response of an auth-collection `auth-with-password` or `auth-refresh` call.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordAuthResponse {
    pub token: String,
    pub record: AuthModel,
}

/// Response of `POST /api/admins/auth-with-password`.
#[derive(Debug, Deserialize)]
pub(crate) struct AdminAuthResponse {
    pub token: String,
    pub admin: AuthModel,
}

/// The authenticated account: a user record or an admin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthModel {
    /// Record (or admin) ID.
    pub id: String,

    /// Email address, when the API exposes it.
    #[serde(default)]
    pub email: Option<String>,

    /// Owning collection; absent for admins.
    #[serde(default, rename = "collectionName")]
    pub collection_name: Option<String>,
}

/// Error body returned by PocketBase on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub message: String,
}
