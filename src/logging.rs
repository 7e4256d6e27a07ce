//! Tracing setup.
//!
//! Each launch writes to stdout and to its own timestamped file under the app
//! `logs` folder. Only the newest files are kept.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Number of launch logs kept on disk.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "churnboard";
const DEFAULT_FILTER: &str = "info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log folder could not be resolved or created.
    #[error("Log directory unavailable: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    /// Existing log files could not be listed for pruning.
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An old log file could not be removed.
    #[error("Failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The launch timestamp could not be formatted.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(time::error::Format),
    /// The log file for this launch could not be created.
    #[error("Failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A global subscriber was already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber (stdout + per-launch file).
///
/// Calling it again is a no-op. Errors are returned so `main` can carry on
/// without logging instead of refusing to start.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    let file_name = log_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&file_name);
    touch(&log_path)?;
    prune_old_logs(&log_dir, MAX_LOG_FILES)?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&log_dir, file_name));
    let timer = build_timer();
    let subscriber = Registry::default()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging initialized; log file at {}", log_path.display());
    Ok(())
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let mut logs = fs::read_dir(dir)
        .map_err(|source| LoggingError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|entry| {
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, entry.path())
        })
        .collect::<Vec<_>>();

    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() - keep;
    for (_, path) in logs.drain(..excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = now.format(NAME_FORMAT).map_err(LoggingError::FormatTime)?;
    Ok(format!("{LOG_FILE_PREFIX}_{stamp}.log"))
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
