//! PocketBase accounts adapter.
//!
//! Implements the `CredentialChecker` port on top of the PocketBase REST API:
//! - Admin login for the shared admin session
//! - Password checks against an auth collection
//! - Token checks via `auth-refresh`
//!
//! # Security
//!
//! - Admin password and session tokens are held as `secrecy::SecretString`
//! - Check calls never share auth state with each other or with the admin session
//! - All check failures collapse into a single `Rejected` outcome
//!
//! # Configuration
//!
//! - `ACCOUNTS__POCKETBASE__HOST`: PocketBase base URL (absent = unconfigured)
//! - `POCKETBASE_USERNAME` / `POCKETBASE_PASSWORD`: admin login, read by `login()`

mod accounts;
mod client;
mod credentials;
mod types;

pub use accounts::PocketBaseAccounts;
pub use client::{AuthStore, PocketBaseClient, PocketBaseError};
pub use credentials::{AdminCredentials, PASSWORD_ENV, USERNAME_ENV};
pub use types::AuthModel;
