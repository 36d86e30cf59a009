pub mod env;
pub mod error;
pub mod loader;

pub use env::{
    REQUIRED_VARS, admin_account, admin_account_from_env, database_settings,
    database_settings_from_env,
};
pub use error::{ConfigError, EnvError};
pub use loader::{load_config, parse_config};
