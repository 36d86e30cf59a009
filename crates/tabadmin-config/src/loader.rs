//! Panel configuration file loading.
//!
//! The configuration is read once at process start. A parse error aborts
//! startup; an empty document (or one without a `tables` key) puts the
//! resolver into pass-through mode.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tabadmin_model::PanelConfig;
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Reads and parses the panel configuration from `path`.
pub fn load_config(path: &Path) -> Result<PanelConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

/// Parses configuration text. `path` is carried into errors for context.
///
/// A `null` or empty document deserializes to the default configuration
/// rather than failing, matching the "no tables key" pass-through mode.
pub fn parse_config(text: &str, path: &Path) -> Result<PanelConfig, ConfigError> {
    let config = serde_yaml::from_str::<Option<PanelConfig>>(text)
        .map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();
    report_oddities(&config);
    Ok(config)
}

/// Logs configuration shapes that are accepted but likely unintended.
fn report_oddities(config: &PanelConfig) {
    let Some(tables) = &config.tables else {
        debug!("no tables key configured; all discovered tables will pass through");
        return;
    };
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for (name, options) in tables {
        if let Some(previous) = seen.insert(name.to_lowercase(), name) {
            warn!(
                first = previous,
                second = %name,
                "table names collide after case normalization; one entry shadows the other"
            );
        }
        if let (Some(link), Some(rich)) = (&options.link_column, &options.rich_text_columns)
            && rich.contains(link)
        {
            debug!(table = %name, column = %link, "link column is also a rich text column");
        }
    }
}
