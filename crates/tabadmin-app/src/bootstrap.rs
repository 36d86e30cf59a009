//! The startup sequence.
//!
//! Runs once per process: provision the auth store, ensure the bootstrap
//! admin exists, reflect the application schema, resolve the configured
//! table views, assemble the admin app, and serve it. Any failure is fatal
//! and propagates to the caller; there are no retries.

use tabadmin_model::{AdminAccount, EngineRef, PanelConfig};
use tabadmin_resolve::resolve;
use tracing::{debug, info};

use crate::error::Result;
use crate::mfa::EncryptionKeySource;
use crate::seams::{
    AdminAppFactory, AdminAppSpec, AdminProvisioned, AdminServer, AuthStore, SchemaReflector,
};

/// Schema reflected from the application database.
pub const PUBLIC_SCHEMA: &str = "public";

/// The set of collaborators the startup sequence is wired to.
pub struct Bootstrap<R, A, K, F, S> {
    pub reflector: R,
    pub auth_store: A,
    pub key_source: K,
    pub factory: F,
    pub server: S,
}

impl<R, A, K, F, S> Bootstrap<R, A, K, F, S>
where
    R: SchemaReflector,
    A: AuthStore,
    K: EncryptionKeySource,
    F: AdminAppFactory,
    S: AdminServer<F::App>,
{
    /// Runs the full startup sequence and serves until shutdown.
    pub fn run(
        &self,
        config: &PanelConfig,
        account: &AdminAccount,
        app_engine: &EngineRef,
    ) -> Result<()> {
        self.auth_store.provision()?;
        match self.auth_store.ensure_admin(account)? {
            AdminProvisioned::Created => info!(email = %account.email, "created bootstrap admin user"),
            AdminProvisioned::AlreadyExists => {
                debug!(email = %account.email, "bootstrap admin user already exists");
            }
        }

        let tables = self.reflector.reflect(PUBLIC_SCHEMA)?;
        info!(count = tables.len(), "reflected application schema");

        let resolved = resolve(config.tables.as_ref(), tables, app_engine);
        info!(count = resolved.len(), "resolved admin table views");

        let spec = AdminAppSpec {
            tables: resolved,
            sidebar_links: config.sidebar_links.clone(),
            mfa_key: self.key_source.new_key(),
            auto_include_related: false,
        };
        let app = self.factory.create(spec)?;
        info!("admin app assembled; serving");
        self.server.serve(app)
    }
}
