//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

// ============================================
// LOGGING CONFIG
// ============================================

/// Settings for `crate::logging::init`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write structured JSONL logs to a file (default: true)
    #[serde(default = "default_json_file")]
    pub json_file: bool,
    /// Directory for the JSONL log (None = ~/.kit/logs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
fn default_json_file() -> bool {
    DEFAULT_JSON_LOG
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json_file: DEFAULT_JSON_LOG,
            log_dir: None,
        }
    }
}

// ============================================
// CATALOG CONFIG
// ============================================

/// Top-level configuration for a story catalog host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Cache rendered trees per (component, label) for the dispatcher's lifetime (default: false)
    #[serde(default = "default_memoize")]
    pub memoize: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_memoize() -> bool {
    DEFAULT_MEMOIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            memoize: DEFAULT_MEMOIZE,
            logging: LoggingConfig::default(),
        }
    }
}
