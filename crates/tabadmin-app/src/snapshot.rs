//! Reflected-schema snapshots.
//!
//! A snapshot is a YAML description of the tables a reflection pass would
//! discover. It lets the CLI check a configuration against a schema
//! offline, with no database connection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tabadmin_model::{Column, DiscoveredTable, EngineRef};

use crate::error::{AppError, Result};
use crate::memory::StaticReflector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub tables: Vec<SnapshotTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTable {
    pub name: String,
    pub columns: Vec<Column>,
}

impl SchemaSnapshot {
    /// Loads a snapshot from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Snapshot(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&text)
            .map_err(|e| AppError::Snapshot(format!("{}: {e}", path.display())))
    }

    /// Materializes the snapshot as a reflector whose tables are bound to
    /// `engine`.
    pub fn into_reflector(self, engine: &EngineRef) -> StaticReflector {
        let tables = self
            .tables
            .into_iter()
            .map(|table| DiscoveredTable::new(table.name, table.columns, engine.clone()))
            .collect();
        StaticReflector::new(tables)
    }
}
