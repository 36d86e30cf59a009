//! Bootstrap admin account settings.

/// Credentials for the bootstrap admin user, read from the environment at
/// startup. The account is created in the auth store only when no user with
/// this email exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}
