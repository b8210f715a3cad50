//! # Dashboard Configuration
//!
//! Runtime configuration loaded from environment variables. Invalid values fail
//! fast at startup through [`DashboardConfig::validate`].
//!
//! | Variable | Default |
//! |---|---|
//! | `DASHBOARD_API_URL` | `http://127.0.0.1:5000` |
//! | `DASHBOARD_POLL_INTERVAL_MS` | `4000` |
//! | `DASHBOARD_REQUEST_TIMEOUT_SECS` | `10` |
//! | `DASHBOARD_SESSION_FILE` | `./dashboard-session.json` |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = "./dashboard-session.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Delay between trade status polls
    pub poll_interval: Duration,
    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,
    /// Where the logged-in username is persisted
    pub session_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let api_url = lookup("DASHBOARD_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let poll_interval_ms: u64 = lookup("DASHBOARD_POLL_INTERVAL_MS")
            .unwrap_or_else(|| DEFAULT_POLL_INTERVAL_MS.to_string())
            .parse()
            .map_err(|e| format!("DASHBOARD_POLL_INTERVAL_MS must be a valid number: {}", e))?;

        let request_timeout_secs: u64 = lookup("DASHBOARD_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| format!("DASHBOARD_REQUEST_TIMEOUT_SECS must be a valid number: {}", e))?;

        let session_file = lookup("DASHBOARD_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let config = Self {
            api_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
            session_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(format!("DASHBOARD_API_URL must be an http(s) URL, got {}", self.api_url));
        }

        if self.poll_interval.is_zero() {
            return Err("DASHBOARD_POLL_INTERVAL_MS must be greater than 0".to_string());
        }

        if self.request_timeout.is_zero() {
            return Err("DASHBOARD_REQUEST_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(())
    }
}
