//! Authentication adapters.
//!
//! Implementations of the `CredentialChecker` port that don't require
//! external services:
//!
//! - `mock` - Test implementation with registered credentials and tokens
//!
//! The production implementation lives in `adapters::pocketbase`.

mod mock;

pub use mock::MockCredentialChecker;
