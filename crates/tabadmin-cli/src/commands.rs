//! Command implementations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tabadmin_app::{PUBLIC_SCHEMA, SchemaReflector, SchemaSnapshot};
use tabadmin_config::{REQUIRED_VARS, admin_account, database_settings, load_config};
use tabadmin_model::{DatabaseEngine, PanelConfig, ResolvedTables};
use tabadmin_resolve::resolve;

use crate::cli::CheckArgs;

/// Outcome of a `check` run, consumed by the summary printer.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub config: PanelConfig,
    pub admin_email: String,
    pub database: String,
    pub host: String,
    /// Present only when a schema snapshot was supplied.
    pub resolved: Option<ResolvedTables>,
}

/// Runs `check` against the process environment.
pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    run_check_with(args, |name| std::env::var(name).ok())
}

/// Runs `check` with an injected environment lookup.
pub fn run_check_with<F>(args: &CheckArgs, lookup: F) -> Result<CheckReport>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config(&args.config)?;
    let account = admin_account(&lookup)?;
    let settings = database_settings(&lookup)?;
    let database = settings.database.clone();
    let host = settings.host.clone();
    let app_engine = Arc::new(DatabaseEngine::Postgres(settings));

    let resolved = match &args.schema {
        None => None,
        Some(schema_path) => {
            let snapshot = SchemaSnapshot::load(schema_path)?;
            let reflector = snapshot.into_reflector(&app_engine);
            let tables = reflector
                .reflect(PUBLIC_SCHEMA)
                .context("reflect schema snapshot")?;
            Some(resolve(config.tables.as_ref(), tables, &app_engine))
        }
    };

    Ok(CheckReport {
        config_path: args.config.clone(),
        config,
        admin_email: account.email,
        database,
        host,
        resolved,
    })
}

/// Environment report for the `env` command.
pub struct EnvReport {
    /// (variable name, is set) in declaration order.
    pub vars: Vec<(&'static str, bool)>,
}

impl EnvReport {
    pub fn missing(&self) -> impl Iterator<Item = &'static str> {
        self.vars
            .iter()
            .filter(|(_, set)| !set)
            .map(|(name, _)| *name)
    }

    pub fn all_set(&self) -> bool {
        self.vars.iter().all(|(_, set)| *set)
    }
}

/// Runs `env` against the process environment.
pub fn run_env() -> EnvReport {
    run_env_with(|name| std::env::var(name).ok())
}

/// Runs `env` with an injected environment lookup.
pub fn run_env_with<F>(lookup: F) -> EnvReport
where
    F: Fn(&str) -> Option<String>,
{
    let vars = REQUIRED_VARS
        .iter()
        .map(|name| {
            let set = lookup(name).is_some_and(|value| !value.is_empty());
            (*name, set)
        })
        .collect();
    EnvReport { vars }
}
