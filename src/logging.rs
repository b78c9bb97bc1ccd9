use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("userql={}", level)
}

/// Directory that holds `log_path`; a bare file name logs to the working directory
fn log_directory(log_path: &Path) -> &Path {
    log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Daily-rotated appender for `log_path`, creating its directory if needed
fn file_appender(log_path: &Path) -> RollingFileAppender {
    let directory = log_directory(log_path);
    let _ = std::fs::create_dir_all(directory);

    tracing_appender::rolling::daily(
        directory,
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("userql.log")),
    )
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        // Structured JSON in the file, no colors
        let file_layer = fmt::layer()
            .with_writer(file_appender(&log_path))
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}
