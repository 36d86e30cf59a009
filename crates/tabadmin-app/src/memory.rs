//! In-memory collaborator implementations.
//!
//! These back the test suite and the CLI `check` command, which resolves a
//! configuration against a schema snapshot without touching a database.

use std::sync::Mutex;

use tabadmin_model::{AdminAccount, DiscoveredTable};

use crate::error::Result;
use crate::seams::{AdminProvisioned, AuthStore, SchemaReflector};

/// A reflector serving a fixed table list.
#[derive(Debug, Clone, Default)]
pub struct StaticReflector {
    tables: Vec<DiscoveredTable>,
}

impl StaticReflector {
    pub fn new(tables: Vec<DiscoveredTable>) -> Self {
        Self { tables }
    }
}

impl SchemaReflector for StaticReflector {
    fn reflect(&self, schema_name: &str) -> Result<Vec<DiscoveredTable>> {
        tracing::debug!(schema = schema_name, count = self.tables.len(), "static reflection");
        Ok(self.tables.clone())
    }
}

/// An auth store keeping user emails in memory.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    provisioned: Mutex<bool>,
    emails: Mutex<Vec<String>>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers a user email, as if created on an earlier run.
    pub fn with_user(self, email: &str) -> Self {
        self.emails
            .lock()
            .expect("auth store lock")
            .push(email.to_string());
        self
    }

    pub fn user_count(&self) -> usize {
        self.emails.lock().expect("auth store lock").len()
    }

    pub fn is_provisioned(&self) -> bool {
        *self.provisioned.lock().expect("auth store lock")
    }
}

impl AuthStore for MemoryAuthStore {
    fn provision(&self) -> Result<()> {
        *self.provisioned.lock().expect("auth store lock") = true;
        Ok(())
    }

    fn ensure_admin(&self, account: &AdminAccount) -> Result<AdminProvisioned> {
        let mut emails = self.emails.lock().expect("auth store lock");
        if emails.iter().any(|email| email == &account.email) {
            return Ok(AdminProvisioned::AlreadyExists);
        }
        emails.push(account.email.clone());
        Ok(AdminProvisioned::Created)
    }
}
