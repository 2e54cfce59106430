//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Authentication Ports
//!
//! - `CredentialChecker` - Password and session token verification

mod credential_checker;

pub use credential_checker::CredentialChecker;
