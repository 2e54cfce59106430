//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `pocketbase` - PocketBase REST client and accounts adapter
//! - `auth` - Mock credential checker for tests

pub mod auth;
pub mod pocketbase;

pub use auth::MockCredentialChecker;
pub use pocketbase::{AdminCredentials, PocketBaseAccounts};
