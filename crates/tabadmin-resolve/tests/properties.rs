//! Property tests for the resolution routine.

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use tabadmin_model::{
    Column, ColumnType, DatabaseEngine, DatabaseSettings, DiscoveredTable, EngineRef,
    RawTableConfig, ResolvedTables, TableOptions,
};
use tabadmin_resolve::resolve;

fn auth_engine() -> EngineRef {
    Arc::new(DatabaseEngine::Sqlite {
        path: "auth.sqlite".into(),
    })
}

fn app_engine() -> EngineRef {
    Arc::new(DatabaseEngine::Postgres(DatabaseSettings {
        database: "app".to_string(),
        user: "panel".to_string(),
        password: "secret".to_string(),
        host: "localhost".to_string(),
        port: 5432,
    }))
}

fn column_strategy() -> impl Strategy<Value = Column> {
    (
        "[a-z][a-z0-9_]{0,11}",
        prop_oneof![
            Just(ColumnType::Integer),
            Just(ColumnType::Real),
            Just(ColumnType::Text),
            Just(ColumnType::Timestamp),
        ],
    )
        .prop_map(|(name, column_type)| Column { name, column_type })
}

fn table_strategy() -> impl Strategy<Value = DiscoveredTable> {
    ("[a-z][a-z0-9_]{0,11}", prop::collection::vec(column_strategy(), 0..8)).prop_map(
        |(name, mut columns)| {
            columns.sort_by(|a, b| a.name.cmp(&b.name));
            columns.dedup_by(|a, b| a.name == b.name);
            DiscoveredTable::new(name, columns, auth_engine())
        },
    )
}

fn tables_strategy() -> impl Strategy<Value = Vec<DiscoveredTable>> {
    prop::collection::vec(table_strategy(), 0..6).prop_map(|mut tables| {
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables.dedup_by(|a, b| a.name == b.name);
        tables
    })
}

/// Config that references a mix of real and made-up names for the tables.
fn config_for(tables: &[DiscoveredTable]) -> RawTableConfig {
    let mut raw = BTreeMap::new();
    for (index, table) in tables.iter().enumerate() {
        if index.is_multiple_of(2) {
            let column_names: Vec<String> = table
                .columns
                .iter()
                .rev()
                .map(|c| c.name.clone())
                .chain(std::iter::once("no_such_column".to_string()))
                .collect();
            raw.insert(
                table.name.clone(),
                TableOptions {
                    visible_columns: Some(column_names),
                    link_column: table.columns.first().map(|c| c.name.clone()),
                    ..TableOptions::default()
                },
            );
        }
    }
    raw.insert("no_such_table".to_string(), TableOptions::default());
    raw
}

proptest! {
    #[test]
    fn passthrough_is_identity_up_to_engine_binding(tables in tables_strategy()) {
        let engine = app_engine();
        let resolved = resolve(None, tables.clone(), &engine);
        let ResolvedTables::Passthrough(output) = resolved else {
            panic!("expected passthrough");
        };
        prop_assert_eq!(output.len(), tables.len());
        for (output_table, input_table) in output.iter().zip(&tables) {
            prop_assert_eq!(&output_table.name, &input_table.name);
            prop_assert_eq!(&output_table.columns, &input_table.columns);
            prop_assert_eq!(&output_table.engine, &engine);
        }
    }

    #[test]
    fn subsets_are_drawn_from_the_table_in_native_order(tables in tables_strategy()) {
        let engine = app_engine();
        let raw = config_for(&tables);
        let resolved = resolve(Some(&raw), tables, &engine);
        let ResolvedTables::Configured(descriptors) = resolved else {
            panic!("expected configured output");
        };
        for descriptor in &descriptors {
            if let Some(columns) = descriptor.visible_columns.columns() {
                let mut last_index = None;
                for column in columns {
                    let index = descriptor
                        .table
                        .columns
                        .iter()
                        .position(|c| c == column)
                        .expect("selected column exists in table");
                    if let Some(previous) = last_index {
                        prop_assert!(index > previous, "native order preserved");
                    }
                    last_index = Some(index);
                }
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(tables in tables_strategy()) {
        let engine = app_engine();
        let raw = config_for(&tables);
        let first = resolve(Some(&raw), tables.clone(), &engine);
        let second = resolve(Some(&raw), tables, &engine);
        prop_assert_eq!(first, second);
    }
}
