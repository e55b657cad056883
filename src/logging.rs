//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.kit/logs/story-catalog.jsonl) - one JSON object per line
//! - **Pretty to stderr** - compact, for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use story_catalog::{config, logging};
//!
//! let config = config::load_config();
//! // MUST keep guard alive for duration of program
//! let _guard = logging::init(&config.logging);
//!
//! tracing::info!(event_type = "catalog", component = "Link", "Registered");
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "story-catalog.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// Safe to call more than once: later calls keep the first subscriber and
/// only return a guard for their own file writer.
pub fn init(config: &LoggingConfig) -> LoggingGuard {
    // Environment filter - configured default, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    // Pretty layer for stderr
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let (json_layer, file_guard, log_path) = match open_log_file(config) {
        Some((file, path)) => {
            // Non-blocking writer so producers never wait on disk
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard), Some(path))
        }
        None => (None, None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            event_type = "app_lifecycle",
            action = "started",
            log_path = ?log_path,
            "Catalog logging initialized"
        );
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(config: &LoggingConfig) -> Option<(fs::File, PathBuf)> {
    if !config.json_file {
        return None;
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
        return None;
    }

    let path = log_dir.join(LOG_FILE_NAME);
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some((file, path)),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    }
}

/// Get the default log directory path (~/.kit/logs/)
fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".kit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("story-catalog-logs"))
}

/// Path of the JSONL log file for a given config
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config
        .log_dir
        .as_deref()
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_dir)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_uses_configured_dir() {
        let config = LoggingConfig {
            log_dir: Some(PathBuf::from("/var/log/catalog")),
            ..Default::default()
        };
        assert_eq!(
            log_path(&config),
            PathBuf::from("/var/log/catalog/story-catalog.jsonl")
        );
    }

    #[test]
    fn test_json_file_disabled_opens_nothing() {
        let config = LoggingConfig {
            json_file: false,
            ..Default::default()
        };
        assert!(open_log_file(&config).is_none());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            log_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let _guard = init(&config);
        assert!(log_path(&config).exists());
    }
}
