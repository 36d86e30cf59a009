//! Table-configuration resolution.
//!
//! Turns the declarative `tables` mapping from the configuration file into
//! view descriptors for the admin-app factory, filtered and validated
//! against the reflected schema. A pure function of its inputs: no I/O,
//! no shared state, invoked once during startup.
//!
//! Lookup misses are recovered locally and never surface to the caller:
//! operators may reference tables or columns that do not exist yet without
//! taking the panel down. A requested table with no discovered counterpart
//! is dropped; an unmatched column list resolves to an empty subset; an
//! unmatched link column resolves to nothing.

use std::collections::BTreeMap;

use tabadmin_model::{
    ColumnSelection, DiscoveredTable, EngineRef, RawTableConfig, ResolvedTables, TableOptions,
    TableViewDescriptor,
};
use tracing::debug;

/// Resolves the configured table list against the discovered schema.
///
/// With no configuration, every discovered table passes through unmodified.
/// Either way, every retained table is re-bound to `app_engine` before the
/// result is returned.
///
/// Table-name matching is case-insensitive: both the configuration keys and
/// the discovered names are normalized to lower case for lookup. Column
/// names are matched exactly.
pub fn resolve(
    config: Option<&RawTableConfig>,
    tables: Vec<DiscoveredTable>,
    app_engine: &EngineRef,
) -> ResolvedTables {
    let mut resolved = match config {
        None => ResolvedTables::Passthrough(tables),
        Some(raw) => ResolvedTables::Configured(resolve_configured(raw, tables)),
    };
    resolved.bind_engine(app_engine);
    resolved
}

fn resolve_configured(
    raw: &RawTableConfig,
    tables: Vec<DiscoveredTable>,
) -> Vec<TableViewDescriptor> {
    let mut options_by_name: BTreeMap<String, &TableOptions> = BTreeMap::new();
    for (name, options) in raw {
        // On case-normalized duplicates the later entry wins; the loader
        // already warned about the collision.
        options_by_name.insert(name.to_lowercase(), options);
    }

    let mut matched = Vec::new();
    let mut descriptors = Vec::new();
    for table in tables {
        let key = table.name.to_lowercase();
        let Some(options) = options_by_name.get(&key).copied() else {
            continue;
        };
        matched.push(key);
        descriptors.push(describe_table(table, options));
    }

    for requested in options_by_name.keys() {
        if !matched.iter().any(|name| name == requested) {
            debug!(table = %requested, "requested table not found in reflected schema; dropped");
        }
    }

    descriptors
}

fn describe_table(table: DiscoveredTable, options: &TableOptions) -> TableViewDescriptor {
    let visible_columns = select_columns(&table, options.visible_columns.as_deref());
    let visible_filters = select_columns(&table, options.visible_filters.as_deref());
    let rich_text_columns = select_columns(&table, options.rich_text_columns.as_deref());
    let link_column = options
        .link_column
        .as_deref()
        .and_then(|name| table.column(name).cloned());
    if options.link_column.is_some() && link_column.is_none() {
        debug!(table = %table.name, "configured link column not found; using none");
    }
    TableViewDescriptor {
        visible_columns,
        visible_filters,
        rich_text_columns,
        link_column,
        menu_group: options.menu_group.clone(),
        table,
    }
}

/// Resolves one configured column list against the table.
///
/// Three-state outcome: no list configured means the framework default
/// (every column); a configured list yields the matching columns in the
/// table's own order, which is empty when nothing matched.
fn select_columns(table: &DiscoveredTable, configured: Option<&[String]>) -> ColumnSelection {
    match configured {
        None => ColumnSelection::All,
        Some(names) => ColumnSelection::Subset(
            table
                .columns
                .iter()
                .filter(|column| names.iter().any(|name| name == &column.name))
                .cloned()
                .collect(),
        ),
    }
}
