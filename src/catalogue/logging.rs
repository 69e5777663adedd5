//! File logging for the catalogue shell.
//!
//! The shell owns the terminal, so log records never go to stdout or stderr.
//! They are written to size-rotated files under `<home>/logs`.
//!
//! # Invariants
//! - The logger is started at most once per process.
//! - A second call with the same directory is a no-op; a different directory
//!   is rejected.
//! - Level `off` skips logger setup entirely.
//!
//! Records use `event=<name> key=value` pairs and carry ids and counts only,
//! never item names or status text.

use crate::error::{CatalogueError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "catalogue";
const LOG_DIR_NAME: &str = "logs";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Directory holding log files for a given catalogue home.
pub fn log_dir_for(home: &Path) -> PathBuf {
    home.join(LOG_DIR_NAME)
}

/// Starts the file logger at `level`, writing into `log_dir`.
///
/// Returns `Ok(false)` when logging is disabled by level `off`.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<bool> {
    let level = level.trim().to_lowercase();
    if level == "off" {
        return Ok(false);
    }

    if let Some(state) = LOGGING_STATE.get() {
        return if state.log_dir == log_dir {
            Ok(true)
        } else {
            Err(CatalogueError::Logging(format!(
                "logging already initialized at `{}`",
                state.log_dir.display()
            )))
        };
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        std::fs::create_dir_all(log_dir)?;

        let logger = Logger::try_with_str(&level)
            .map_err(|err| CatalogueError::Logging(format!("invalid log level `{level}`: {err}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| CatalogueError::Logging(format!("failed to start logger: {err}")))?;

        info!(
            "event=app_start level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    Ok(true)
}
