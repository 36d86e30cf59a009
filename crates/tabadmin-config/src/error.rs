#![deny(unsafe_code)]

use std::path::PathBuf;

/// Errors from loading the panel configuration file. All fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors from reading environment-backed settings. All fatal at startup.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("missing required environment variable: {name}")]
    Missing { name: &'static str },

    #[error("DB_PORT is not a valid port number: {value:?}")]
    InvalidPort { value: String },
}
