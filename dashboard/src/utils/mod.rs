//! # Utility Functions
//!
//! Shared utility functions used across the dashboard client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation utilities (credentials, currency codes, amounts)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address formatting, normalization)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
