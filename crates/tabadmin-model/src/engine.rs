//! Database engine handles.
//!
//! The process owns exactly two connections: a local SQLite store holding
//! the auth tables, and the application Postgres database whose schema is
//! reflected into the admin panel. Both are passed around as explicit
//! handles; there is no ambient global engine.

use std::path::PathBuf;
use std::sync::Arc;

/// Connection settings for the application Postgres database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// A process-owned database connection handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseEngine {
    /// Local SQLite store for users, sessions, and MFA secrets.
    Sqlite { path: PathBuf },
    /// Application database whose tables are exposed in the panel.
    Postgres(DatabaseSettings),
}

impl DatabaseEngine {
    /// True for the application (reflected) database engine.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Postgres(_))
    }
}

/// Shared reference to an engine, cloned into every table it owns.
pub type EngineRef = Arc<DatabaseEngine>;
