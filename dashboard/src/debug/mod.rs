//! # Debugging and Tracing Infrastructure
//!
//! Logging and task instrumentation for the dashboard client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/dashboard.log` (daily rotation)
//! - **Async task tracking**: Every background task runs in a span with a trace id
//! - **Panic logging**: Panics are written to the log before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup, keep the guard alive until exit
//! let _log_guard = dashboard::debug::init();
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `dashboard=info,warn`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: Mirror logs to stderr (1=on)
//! - `DASHBOARD_LOG_JSON`: JSON lines in the log file (1=on)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::LogGuard;
pub use task_tracker::{active_task_count, spawn_tracked};

/// Initialize the debugging system from the environment.
pub fn init() -> Option<LogGuard> {
    logger::init(&DebugConfig::from_env())
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
