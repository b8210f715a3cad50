//! # Shared Utility Functions
//!
//! Common helpers used by the DTOs and the dashboard client.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with default parameters
//!
//! ## Normalization
//!
//! The backend treats usernames case-insensitively and currency codes in
//! uppercase; the client applies the same rules before sending anything.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, normalize_currency};
//!
//! let address = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
//! assert_eq!(format_address(address, 4, 4), "rHb9...tyTh");
//! assert_eq!(normalize_currency(" usd "), "USD");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Currency code of the network's native asset.
pub const NATIVE_CURRENCY: &str = "XRP";

/// Seconds between the Unix epoch and the ledger epoch (2000-01-01T00:00:00Z).
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Format a ledger address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
/// assert_eq!(format_address(addr, 4, 4), "rHb9...tyTh");
/// assert_eq!(format_address(addr, 6, 6), "rHb9CJ...wdtyTh");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    // Ledger addresses are base58, so byte slicing is safe once we know it is ASCII
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a ledger address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Trimmed, uppercase currency code.
pub fn normalize_currency(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Trimmed, lowercase username.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `currency` is the native asset (case-insensitive).
pub fn is_native_currency(currency: &str) -> bool {
    normalize_currency(currency) == NATIVE_CURRENCY
}

/// Convert a ledger timestamp (seconds since 2000-01-01) to UTC.
pub fn ripple_time_to_utc(ripple_seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ripple_seconds.checked_add(RIPPLE_EPOCH_OFFSET)?, 0)
}

/// Deserialize a decimal that may arrive as a JSON string, number or null.
pub fn de_decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Deserialize an `f64` that may arrive as a JSON number or numeric string.
pub fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s}"))),
        _ => Ok(0.0),
    }
}
