//! Startup sequence tests with in-memory collaborators.

use std::sync::{Arc, Mutex};

use tabadmin_app::{
    AdminAppFactory, AdminAppSpec, AdminServer, AppError, Bootstrap, EncryptionKey,
    EncryptionKeySource, KEY_LEN, MemoryAuthStore, StaticReflector,
};
use tabadmin_model::{
    AdminAccount, Column, ColumnType, DatabaseEngine, DatabaseSettings, DiscoveredTable,
    EngineRef, PanelConfig, RawTableConfig, ResolvedTables, TableOptions,
};

struct FixedKeySource;

impl EncryptionKeySource for FixedKeySource {
    fn new_key(&self) -> EncryptionKey {
        EncryptionKey::new([42u8; KEY_LEN])
    }
}

/// Captures the spec handed to the factory instead of building an app.
#[derive(Default)]
struct RecordingFactory {
    specs: Mutex<Vec<AdminAppSpec>>,
}

impl AdminAppFactory for &RecordingFactory {
    type App = usize;

    fn create(&self, spec: AdminAppSpec) -> Result<usize, AppError> {
        let mut specs = self.specs.lock().expect("factory lock");
        specs.push(spec);
        Ok(specs.len())
    }
}

struct NoopServer;

impl AdminServer<usize> for NoopServer {
    fn serve(&self, _app: usize) -> Result<(), AppError> {
        Ok(())
    }
}

struct FailingServer;

impl AdminServer<usize> for FailingServer {
    fn serve(&self, _app: usize) -> Result<(), AppError> {
        Err(AppError::Server("bind failed".to_string()))
    }
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

fn auth_engine() -> EngineRef {
    Arc::new(DatabaseEngine::Sqlite {
        path: "auth.sqlite".into(),
    })
}

fn account() -> AdminAccount {
    AdminAccount {
        email: "admin@example.com".to_string(),
        username: "admin".to_string(),
        password: "hunter2".to_string(),
    }
}

fn reflector() -> StaticReflector {
    StaticReflector::new(vec![
        DiscoveredTable::new(
            "orders",
            vec![
                Column::new("id", ColumnType::Integer),
                Column::new("total", ColumnType::Real),
            ],
            auth_engine(),
        ),
        DiscoveredTable::new(
            "customers",
            vec![Column::new("id", ColumnType::Integer)],
            auth_engine(),
        ),
    ])
}

#[test]
fn full_sequence_provisions_resolves_and_serves() {
    let factory = RecordingFactory::default();
    let auth_store = MemoryAuthStore::new();
    let bootstrap = Bootstrap {
        reflector: reflector(),
        auth_store,
        key_source: FixedKeySource,
        factory: &factory,
        server: NoopServer,
    };

    let mut raw = RawTableConfig::new();
    raw.insert(
        "Orders".to_string(),
        TableOptions {
            visible_columns: Some(vec!["id".to_string()]),
            menu_group: Some("Sales".to_string()),
            ..TableOptions::default()
        },
    );
    let config = PanelConfig {
        tables: Some(raw),
        sidebar_links: Some(
            [("Docs".to_string(), "https://example.com".to_string())]
                .into_iter()
                .collect(),
        ),
    };

    let engine = app_engine();
    bootstrap
        .run(&config, &account(), &engine)
        .expect("bootstrap succeeds");

    assert!(bootstrap.auth_store.is_provisioned());
    assert_eq!(bootstrap.auth_store.user_count(), 1);

    let specs = factory.specs.lock().expect("factory lock");
    assert_eq!(specs.len(), 1);
    let spec = &specs[0];
    assert!(!spec.auto_include_related);
    assert!(spec.sidebar_links.is_some());
    assert_eq!(spec.mfa_key, EncryptionKey::new([42u8; KEY_LEN]));
    let ResolvedTables::Configured(descriptors) = &spec.tables else {
        panic!("expected configured tables");
    };
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].table.name, "orders");
    assert_eq!(&descriptors[0].table.engine, &engine);
}

#[test]
fn absent_tables_key_passes_everything_through() {
    let factory = RecordingFactory::default();
    let bootstrap = Bootstrap {
        reflector: reflector(),
        auth_store: MemoryAuthStore::new(),
        key_source: FixedKeySource,
        factory: &factory,
        server: NoopServer,
    };

    let engine = app_engine();
    bootstrap
        .run(&PanelConfig::default(), &account(), &engine)
        .expect("bootstrap succeeds");

    let specs = factory.specs.lock().expect("factory lock");
    let ResolvedTables::Passthrough(tables) = &specs[0].tables else {
        panic!("expected passthrough");
    };
    assert_eq!(tables.len(), 2);
    assert!(tables.iter().all(|t| t.engine == engine));
}

#[test]
fn admin_user_is_created_only_on_first_run() {
    let factory = RecordingFactory::default();
    let bootstrap = Bootstrap {
        reflector: reflector(),
        auth_store: MemoryAuthStore::new().with_user("admin@example.com"),
        key_source: FixedKeySource,
        factory: &factory,
        server: NoopServer,
    };

    bootstrap
        .run(&PanelConfig::default(), &account(), &app_engine())
        .expect("bootstrap succeeds");
    assert_eq!(bootstrap.auth_store.user_count(), 1);
}

#[test]
fn server_failure_propagates() {
    let factory = RecordingFactory::default();
    let bootstrap = Bootstrap {
        reflector: reflector(),
        auth_store: MemoryAuthStore::new(),
        key_source: FixedKeySource,
        factory: &factory,
        server: FailingServer,
    };

    let error = bootstrap
        .run(&PanelConfig::default(), &account(), &app_engine())
        .expect_err("server error is fatal");
    assert!(matches!(error, AppError::Server(_)));
}
