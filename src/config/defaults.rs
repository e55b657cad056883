//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Render results are recomputed on every call unless memoization is enabled
pub const DEFAULT_MEMOIZE: bool = false;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Write the JSONL log file by default
pub const DEFAULT_JSON_LOG: bool = true;

/// Config file name, resolved under ~/.kit/
pub const CONFIG_FILE_NAME: &str = "storybook.json";
