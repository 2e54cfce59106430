//! Domain layer containing the accounts vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (user IDs, check outcomes, errors)

pub mod foundation;
