//! # Core Abstractions
//!
//! Foundational pieces used throughout the dashboard:
//!
//! - **[`config`]**: Environment-driven configuration (`DashboardConfig`)
//! - **[`error`]**: Application error types (`AppError`, `RequestError`, `Result<T>`)
//! - **[`service`]**: The backend contract as a trait (`ApiService`) for dependency injection
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::core::{ApiService, DashboardConfig};
//! use dashboard::services::api::ApiClient;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&DashboardConfig::default()));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::DashboardConfig;
pub use error::{AppError, RequestError, Result};
pub use service::ApiService;
