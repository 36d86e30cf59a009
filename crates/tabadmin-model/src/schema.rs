//! Reflected schema handles.
//!
//! These types are produced by the external schema reflector and are
//! read-only from the resolver's perspective, apart from the engine
//! re-binding applied after resolution.

use serde::{Deserialize, Serialize};

use crate::engine::EngineRef;

/// Broad column type classification as reported by reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Boolean,
    Timestamp,
    Json,
    Bytes,
    Other(String),
}

/// A reflected column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// A schema-reflected table handle with its ordered columns and the engine
/// that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredTable {
    pub name: String,
    pub columns: Vec<Column>,
    pub engine: EngineRef,
}

impl DiscoveredTable {
    pub fn new(name: impl Into<String>, columns: Vec<Column>, engine: EngineRef) -> Self {
        Self {
            name: name.into(),
            columns,
            engine,
        }
    }

    /// Looks up a column by exact name. Column names are unique per table.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
