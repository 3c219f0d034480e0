//! File-backed structured logging. The terminal belongs to the UI, so nothing is written to stdout
//! or stderr once the subscriber is installed.

use crate::config::LoggingConfig;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured filter directive.
pub const LOG_ENV_VAR: &str = "SLASHLINE_LOG";

const DEFAULT_FILE_NAME: &str = "slashline.log";

/// Pick the log file: the command line wins over the config file.
pub fn resolve_log_file(cli_override: Option<PathBuf>, config: &LoggingConfig) -> Option<PathBuf> {
    cli_override.or_else(|| config.file.clone())
}

/// Install the global subscriber writing to `file`. The returned guard flushes buffered records
/// when dropped, so `main` must hold it until exit. Without a file, logging stays disabled.
pub fn init_logging(file: Option<&Path>, level: &str) -> io::Result<Option<WorkerGuard>> {
    let Some(file) = file else {
        return Ok(None);
    };

    let directory = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&directory)?;
    let file_name = file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    // A subscriber may already be installed (e.g. by a test harness); keep that one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_log_file_overrides_config() {
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/from/config.log")),
        };

        assert_eq!(
            resolve_log_file(Some(PathBuf::from("/from/cli.log")), &config),
            Some(PathBuf::from("/from/cli.log"))
        );
        assert_eq!(
            resolve_log_file(None, &config),
            Some(PathBuf::from("/from/config.log"))
        );
    }

    #[test]
    fn test_no_file_disables_logging() {
        assert!(init_logging(None, "info").unwrap().is_none());
    }

    #[test]
    fn test_missing_log_directory_is_created() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("slashline.log");

        let guard = init_logging(Some(&file), "debug").unwrap();

        assert!(guard.is_some());
        assert!(dir.path().join("nested").is_dir());
    }
}
