pub mod account;
pub mod config;
pub mod engine;
pub mod schema;
pub mod view;

pub use account::AdminAccount;
pub use config::{PanelConfig, RawTableConfig, TableOptions};
pub use engine::{DatabaseEngine, DatabaseSettings, EngineRef};
pub use schema::{Column, ColumnType, DiscoveredTable};
pub use view::{ColumnSelection, ResolvedTables, TableViewDescriptor};
