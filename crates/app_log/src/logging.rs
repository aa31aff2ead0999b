//! Structured logging setup with tracing

use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Daily files are named `photo_desk.log.YYYY-MM-DD`
pub const LOG_FILE_PREFIX: &str = "photo_desk.log";

/// Initialize the logging system
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = super::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"));

    #[cfg(debug_assertions)]
    {
        // Development: pretty console output + file
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .with(fmt::layer().json().with_writer(non_blocking))
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        // Release: JSON file only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(non_blocking))
            .try_init()?;
    }

    tracing::info!("Logging initialized in {:?}", log_dir);
    Ok(guard)
}

/// Clean up log files older than specified days
pub fn cleanup_old_logs(days: u32) -> anyhow::Result<usize> {
    let max_age = Duration::from_secs(days as u64 * 24 * 60 * 60);
    let deleted = cleanup_logs_in(&super::log_dir(), max_age)?;
    tracing::info!("Cleaned up {} old log files", deleted);
    Ok(deleted)
}

fn cleanup_logs_in(log_dir: &Path, max_age: Duration) -> std::io::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let threshold = SystemTime::now()
        .checked_sub(max_age)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut deleted = 0;

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if matches!(modified, Ok(modified) if modified < threshold) && std::fs::remove_file(&path).is_ok() {
            deleted += 1;
            tracing::debug!("Deleted old log: {:?}", path);
        }
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(cleanup_logs_in(&missing, Duration::ZERO).unwrap(), 0);
    }

    #[test]
    fn test_recent_logs_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join(format!("{}.2026-10-01", LOG_FILE_PREFIX));
        std::fs::write(&log, "{}").unwrap();

        let deleted = cleanup_logs_in(dir.path(), Duration::from_secs(7 * 24 * 60 * 60)).unwrap();
        assert_eq!(deleted, 0);
        assert!(log.exists());
    }

    #[test]
    fn test_only_rolled_logs_are_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join(format!("{}.2026-10-01", LOG_FILE_PREFIX));
        let other = dir.path().join("notes.txt");
        std::fs::write(&log, "{}").unwrap();
        std::fs::write(&other, "keep").unwrap();

        std::thread::sleep(Duration::from_millis(20));
        let deleted = cleanup_logs_in(dir.path(), Duration::from_millis(1)).unwrap();

        assert_eq!(deleted, 1);
        assert!(!log.exists());
        assert!(other.exists());
    }
}
