//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, check outcomes and error types that form the
//! vocabulary of the accounts domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AccountsError, ConfigurationError, CredentialCheck};
pub use errors::ValidationError;
pub use ids::UserId;
