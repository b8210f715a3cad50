//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking log writer flushing. Drop it on shutdown.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for `logs/dashboard.log`
/// - Plain or JSON lines, no ANSI codes in files
/// - Optional stderr mirror (`DASHBOARD_LOG_STDERR=1`)
/// - Panic hook that logs location and message
///
/// Returns `None` when the log directory cannot be created or a global
/// subscriber is already installed; the app keeps running without file logs.
pub fn init(config: &DebugConfig) -> Option<LogGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let json_layer = config.log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(file_writer.clone())
            .with_target(true)
            .with_current_span(true)
    });

    let text_layer = (!config.log_json).then(|| {
        fmt::layer()
            .with_writer(file_writer.clone())
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
    });

    let stderr_layer = config.log_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        json = config.log_json,
        stderr = config.log_stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(LogGuard { _file: guard })
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
