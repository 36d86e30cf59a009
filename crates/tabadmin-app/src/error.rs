use thiserror::Error;

/// Errors surfaced by collaborators during startup. All fatal: the process
/// exits before serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("schema reflection failed: {0}")]
    Reflection(String),
    #[error("auth store error: {0}")]
    AuthStore(String),
    #[error("admin app factory error: {0}")]
    Factory(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("failed to load schema snapshot: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
