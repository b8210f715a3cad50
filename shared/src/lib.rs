//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the ledger
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{ success, data, error }` wrapper every response uses
//!   - **[`dto::auth`]**: Login request/response
//!   - **[`dto::trade`]**: Swap offer creation, status polling, cancellation, open offers
//!   - **[`dto::wallet`]**: Wallet summary, trust lines, ledger history
//!   - **[`dto::trustline`]**: Issuer risk checks and trust line creation
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format ledger addresses for display
//!   - **[`utils::normalize_currency`]**: Canonical currency codes
//!   - **[`utils::ripple_time_to_utc`]**: Ledger timestamps to UTC
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust and JSON, except ledger transaction
//!   fields which keep the ledger's `PascalCase` names
//! - Optional fields are omitted from JSON when `None`
//! - Every backend response is wrapped in [`dto::envelope::ApiEnvelope`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::envelope::ApiEnvelope;
//! use shared::dto::trade::TradeStatusResponse;
//!
//! let body = r#"{"success":true,"data":{"status":"open"}}"#;
//! let envelope: ApiEnvelope<TradeStatusResponse> = serde_json::from_str(body).unwrap();
//! assert!(envelope.success);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
