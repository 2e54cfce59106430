//! PocketBase accounts startup check.
//!
//! Loads configuration, installs logging, and logs the admin account in to
//! PocketBase. Exits non-zero when the admin login fails so process
//! supervisors surface a misconfigured host or credentials at startup.

use std::process::ExitCode;

use pocketbase_accounts::adapters::PocketBaseAccounts;
use pocketbase_accounts::config::{AppConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let accounts = match PocketBaseAccounts::from_config(config.pocketbase) {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create accounts adapter");
            return ExitCode::FAILURE;
        }
    };

    let Some(host) = accounts.host() else {
        tracing::info!("PocketBase not configured; accounts are disabled");
        return ExitCode::SUCCESS;
    };

    tracing::info!(host, "Logging in to PocketBase");
    match accounts.login().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "PocketBase admin login failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber; `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
