//! Resolver output: per-table view descriptors.

use crate::engine::EngineRef;
use crate::schema::{Column, DiscoveredTable};

/// Outcome of resolving a configured column list against a table.
///
/// The three states are distinct on purpose: an absent list means the
/// framework shows every column, while a present list that matched nothing
/// resolves to an empty subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// No list configured; the framework default applies.
    All,
    /// Configured list resolved against the table, in the table's own
    /// column order. May be empty.
    Subset(Vec<Column>),
}

impl ColumnSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The resolved columns, or `None` for the framework default.
    pub fn columns(&self) -> Option<&[Column]> {
        match self {
            Self::All => None,
            Self::Subset(columns) => Some(columns),
        }
    }
}

/// Resolved view customization for one retained table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewDescriptor {
    pub table: DiscoveredTable,
    pub visible_columns: ColumnSelection,
    pub visible_filters: ColumnSelection,
    pub rich_text_columns: ColumnSelection,
    pub link_column: Option<Column>,
    pub menu_group: Option<String>,
}

/// Output of one resolution pass, handed to the admin-app factory.
///
/// With no `tables` key configured, every discovered table passes through
/// without descriptor wrapping; otherwise only configured tables survive,
/// each wrapped in a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTables {
    Passthrough(Vec<DiscoveredTable>),
    Configured(Vec<TableViewDescriptor>),
}

impl ResolvedTables {
    pub fn len(&self) -> usize {
        match self {
            Self::Passthrough(tables) => tables.len(),
            Self::Configured(descriptors) => descriptors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the retained table handles in output order.
    pub fn tables(&self) -> impl Iterator<Item = &DiscoveredTable> {
        let (passthrough, configured) = match self {
            Self::Passthrough(tables) => (Some(tables.iter()), None),
            Self::Configured(descriptors) => {
                (None, Some(descriptors.iter().map(|d| &d.table)))
            }
        };
        passthrough
            .into_iter()
            .flatten()
            .chain(configured.into_iter().flatten())
    }

    /// Re-binds every retained table to the given engine.
    ///
    /// Reflection produces tables bound to whichever engine performed the
    /// introspection; the admin app must edit them through the application
    /// engine, never the auth engine.
    pub fn bind_engine(&mut self, engine: &EngineRef) {
        match self {
            Self::Passthrough(tables) => {
                for table in tables {
                    table.engine = engine.clone();
                }
            }
            Self::Configured(descriptors) => {
                for descriptor in descriptors {
                    descriptor.table.engine = engine.clone();
                }
            }
        }
    }
}
