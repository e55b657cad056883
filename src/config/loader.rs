//! Configuration loading from file system
//!
//! The config file is plain JSON. Any failure falls back to defaults.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use super::defaults::CONFIG_FILE_NAME;
use super::types::CatalogConfig;
use crate::error::ResultExt;

/// Path of the default config file (~/.kit/storybook.json)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".kit"))
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from ~/.kit/storybook.json
pub fn load_config() -> CatalogConfig {
    load_config_from(config_path())
}

/// Load configuration from an explicit path.
///
/// Returns `CatalogConfig::default()` if the file is missing or invalid.
#[instrument(name = "load_config", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config_from(path: impl AsRef<Path>) -> CatalogConfig {
    let path = path.as_ref();

    if !path.exists() {
        info!("Config file not found, using defaults");
        return CatalogConfig::default();
    }

    let Some(contents) = std::fs::read_to_string(path).warn_on_err() else {
        return CatalogConfig::default();
    };

    match serde_json::from_str::<CatalogConfig>(&contents) {
        Ok(config) => {
            debug!(memoize = config.memoize, "Loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to parse config, using defaults");
            CatalogConfig::default()
        }
    }
}
