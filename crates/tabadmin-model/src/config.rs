//! Declarative panel configuration as parsed from `config.yaml`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// View customization options for a single table.
///
/// All fields are optional: an absent column list means "show every column"
/// (the framework default), which is distinct from a present-but-unmatched
/// list resolving to an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableOptions {
    /// Columns shown in the table list view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_columns: Option<Vec<String>>,

    /// Columns offered in the filter sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_filters: Option<Vec<String>>,

    /// Columns rendered with a rich text editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_text_columns: Option<Vec<String>>,

    /// Column used as the row link in the list view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_column: Option<String>,

    /// Sidebar menu group the table is listed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_group: Option<String>,
}

/// The raw `tables` mapping: display name to options record.
pub type RawTableConfig = BTreeMap<String, TableOptions>;

/// Top-level panel configuration.
///
/// `sidebar_links` is an opaque passthrough handed to the admin-app factory
/// unchanged; only `tables` is processed by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<RawTableConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_links: Option<BTreeMap<String, String>>,
}

impl PanelConfig {
    /// Lower-cased set of table names requested by the configuration.
    ///
    /// Returns `None` when no `tables` key was configured, in which case the
    /// resolver passes every discovered table through unmodified.
    pub fn requested_tables(&self) -> Option<BTreeSet<String>> {
        self.tables
            .as_ref()
            .map(|tables| tables.keys().map(|name| name.to_lowercase()).collect())
    }
}
