//! Configuration module - catalog host settings
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (CatalogConfig, LoggingConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_LOG_FILTER, DEFAULT_MEMOIZE};
pub use loader::{config_path, load_config, load_config_from};
pub use types::{CatalogConfig, LoggingConfig};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
