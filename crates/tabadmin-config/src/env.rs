//! Environment-backed settings.
//!
//! The bootstrap admin account and the application database connection are
//! configured entirely through environment variables. Any missing variable
//! is fatal before the server starts. Lookups are injectable so tests never
//! touch the process environment.

use tabadmin_model::{AdminAccount, DatabaseSettings};

use crate::error::EnvError;

/// Every environment variable required at startup, in report order.
pub const REQUIRED_VARS: [&str; 8] = [
    "EMAIL",
    "USERNAME",
    "PASSWORD",
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_PORT",
];

/// Reads the bootstrap admin account from the process environment.
pub fn admin_account_from_env() -> Result<AdminAccount, EnvError> {
    admin_account(|name| std::env::var(name).ok())
}

/// Reads the bootstrap admin account through `lookup`.
pub fn admin_account<F>(lookup: F) -> Result<AdminAccount, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(AdminAccount {
        email: require(&lookup, "EMAIL")?,
        username: require(&lookup, "USERNAME")?,
        password: require(&lookup, "PASSWORD")?,
    })
}

/// Reads the application database settings from the process environment.
pub fn database_settings_from_env() -> Result<DatabaseSettings, EnvError> {
    database_settings(|name| std::env::var(name).ok())
}

/// Reads the application database settings through `lookup`.
pub fn database_settings<F>(lookup: F) -> Result<DatabaseSettings, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    let port_raw = require(&lookup, "DB_PORT")?;
    let port = port_raw
        .parse::<u16>()
        .map_err(|_| EnvError::InvalidPort { value: port_raw })?;
    Ok(DatabaseSettings {
        database: require(&lookup, "DB_NAME")?,
        user: require(&lookup, "DB_USER")?,
        password: require(&lookup, "DB_PASSWORD")?,
        host: require(&lookup, "DB_HOST")?,
        port,
    })
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(EnvError::Missing { name })
}
