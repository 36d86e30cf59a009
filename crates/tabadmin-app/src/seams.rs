//! Collaborator seams.
//!
//! Schema reflection, auth storage, admin-app assembly, and HTTP serving
//! are external frameworks from this crate's point of view. Each appears
//! here as a trait with typed inputs and outputs; the bootstrap sequence
//! is written against these seams only.

use std::collections::BTreeMap;

use tabadmin_model::{AdminAccount, DiscoveredTable, ResolvedTables};

use crate::error::Result;
use crate::mfa::EncryptionKey;

/// Introspects a live database into table handles.
pub trait SchemaReflector {
    fn reflect(&self, schema_name: &str) -> Result<Vec<DiscoveredTable>>;
}

/// Outcome of ensuring the bootstrap admin account exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminProvisioned {
    Created,
    AlreadyExists,
}

/// The local store holding users, sessions, and MFA secrets.
pub trait AuthStore {
    /// Creates the auth tables if they do not exist yet.
    fn provision(&self) -> Result<()>;

    /// Creates the bootstrap admin user unless a user with the account's
    /// email already exists.
    fn ensure_admin(&self, account: &AdminAccount) -> Result<AdminProvisioned>;
}

/// Everything the admin-app factory needs to assemble the panel.
#[derive(Debug)]
pub struct AdminAppSpec {
    pub tables: ResolvedTables,
    pub sidebar_links: Option<BTreeMap<String, String>>,
    pub mfa_key: EncryptionKey,
    pub auto_include_related: bool,
}

/// Assembles the admin application from a resolved spec.
pub trait AdminAppFactory {
    type App;

    fn create(&self, spec: AdminAppSpec) -> Result<Self::App>;
}

/// Serves an assembled admin application until shutdown.
pub trait AdminServer<App> {
    fn serve(&self, app: App) -> Result<()>;
}
