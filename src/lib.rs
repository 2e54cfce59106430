//! PocketBase Accounts - credential and session token verification
//!
//! This crate checks user passwords and session tokens against a PocketBase
//! instance and keeps an admin session for server-side PocketBase access.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
